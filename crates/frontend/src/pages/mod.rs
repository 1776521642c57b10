pub mod admin;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod services;
pub mod story;

pub use admin::AdminPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use services::ServicesPage;
pub use story::StoryPage;
