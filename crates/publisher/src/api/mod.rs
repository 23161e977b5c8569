pub mod api_requests;
mod blocking;
mod client;
mod config;
mod error;
mod params;
mod response;

pub use blocking::BlockingApiClient;
pub use client::ApiClient;
pub use config::{Config, ConfigError};
pub use error::ApiError;
pub use params::{ParamValue, Params};
pub use response::Response;
