//! Lustra Client - HTTP client for the commerce API
//!
//! Provides the typed API surface of the remote storefront backend:
//! catalog browsing and batch resolution, order management and admin
//! status updates.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
#[cfg(feature = "in-process")]
pub mod oneshot;

pub use api::CommerceApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use oneshot::OneshotHttpClient;
