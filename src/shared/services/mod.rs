// Shared services
pub mod api_service;

pub use api_service::{search_url, search_vehicle};
