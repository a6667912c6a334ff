//! Storefront error types

use lustra_client::ClientError;
use thiserror::Error;

/// Error type for the storefront flows
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// The stored token was rejected; it has been purged and the user
    /// must authenticate again.
    #[error("Authentication expired")]
    AuthExpired,

    /// Remote API failure
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Local persistence failure
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
}

/// Result type for storefront operations
pub type StorefrontResult<T> = Result<T, StorefrontError>;
