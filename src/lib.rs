//! Rust SDK for the Skiff serverless platform API.

mod auth;
mod backends;
mod client;
pub mod error;
mod http_client;
pub mod models;
mod pagination;
mod request;
pub mod resources;
mod retry;

pub use auth::{Authenticator, BearerAuthenticator, NoAuth};
#[cfg(feature = "reqwest-client")]
pub use backends::ReqwestClient;
#[cfg(feature = "ureq-client")]
pub use backends::UreqClient;
pub use client::{ClientBuilder, ClientConfig, ResponseEnvelope, SkiffClient};
#[cfg(feature = "reqwest-client")]
pub use client::Skiff;
pub use error::{HttpClientError, SkiffError};
pub use http_client::{HttpClient, HttpRequest, HttpResponse};
pub use pagination::Pager;
pub use request::RequestSpec;
pub use retry::RetryPolicy;

/// Default base URL for the Skiff API.
pub const DEFAULT_BASE_URL: &str = "https://api.skiff.dev/v2";

/// User agent sent with every request unless the caller overrides it.
pub const SDK_USER_AGENT: &str = concat!("skiff-dev-rust/", env!("CARGO_PKG_VERSION"));
