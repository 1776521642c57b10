pub mod image;
pub mod mock;
pub mod service;
pub mod source;
pub mod ui;
