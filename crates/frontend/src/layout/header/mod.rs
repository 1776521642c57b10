pub mod header;
pub mod mega_menu;

pub use header::Header;
pub use mega_menu::MegaMenuCategory;
