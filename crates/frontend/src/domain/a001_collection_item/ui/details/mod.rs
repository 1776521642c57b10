//! Collection item details
//!
//! - view_model.rs: loading state and the fetch command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::CollectionItemDetails;
pub use view_model::CollectionItemDetailsViewModel;
