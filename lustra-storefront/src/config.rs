//! Storefront configuration

use lustra_client::ClientConfig;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;

/// Configuration of the storefront application layer
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Commerce API base URL
    pub api_base_url: String,

    /// Directory holding the persisted collections and the session file
    pub data_dir: PathBuf,

    /// Delivery surcharge added on top of the cart subtotal (may be zero)
    pub delivery_cost: Decimal,

    /// HTTP timeout in seconds
    pub timeout: u64,
}

impl StorefrontConfig {
    pub fn new(api_base_url: impl Into<String>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            data_dir: data_dir.into(),
            delivery_cost: Decimal::ZERO,
            timeout: 30,
        }
    }

    /// Read the configuration from the environment (a `.env` file is
    /// honored): `LUSTRA_API_URL`, `LUSTRA_DATA_DIR`,
    /// `LUSTRA_DELIVERY_COST`, `LUSTRA_HTTP_TIMEOUT`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_base_url = std::env::var("LUSTRA_API_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string());
        let data_dir = std::env::var("LUSTRA_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".lustra"));
        let delivery_cost = std::env::var("LUSTRA_DELIVERY_COST")
            .ok()
            .and_then(|v| Decimal::from_str(&v).ok())
            .unwrap_or(Decimal::ZERO);
        let timeout = std::env::var("LUSTRA_HTTP_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Self {
            api_base_url,
            data_dir,
            delivery_cost,
            timeout,
        }
    }

    /// Set the delivery surcharge
    pub fn with_delivery_cost(mut self, cost: Decimal) -> Self {
        self.delivery_cost = cost;
        self
    }

    /// Set the HTTP timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Derive the HTTP client configuration
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_base_url.clone()).with_timeout(self.timeout)
    }
}
