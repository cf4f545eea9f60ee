//! Proxy module
//!
//! The core passthrough logic: parameter defaulting, upstream URL
//! construction, and the single outbound call. Independent of the HTTP
//! framework so it can be tested without a server.

mod error;
mod executor;
mod models;

pub use error::ProxyError;
pub use executor::UnsplashProxy;
pub use models::SearchParams;
