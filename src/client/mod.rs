//! HTTP client for the todo REST API.

mod api_client;


pub use api_client::{API_BASE_URL_ENV, ApiClient, DEFAULT_API_BASE_URL};
