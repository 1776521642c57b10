pub mod client;
pub mod error;

pub use client::{HttpClient, Method};
pub use error::ApiError;
