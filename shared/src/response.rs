//! Response payloads of the commerce API
//!
//! The remote API returns bare JSON shapes per endpoint rather than a
//! common envelope, so each payload is typed on its own.

use crate::models::{CatalogProduct, Order};
use serde::{Deserialize, Serialize};

/// Response of `POST /api/products/list`
///
/// May contain fewer products than the request had entries: identities
/// the catalog no longer carries are silently absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveResponse {
    pub products: Vec<CatalogProduct>,
}

/// One page of `GET /api/products/{brand}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<CatalogProduct>,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
    #[serde(rename = "totalProducts")]
    pub total_products: u64,
}

/// Response of `GET /api/orders` and `GET /api/all-orders`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderListResponse {
    pub orders: Vec<Order>,
}

/// Response of `GET /api/orders/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetailResponse {
    pub order: Order,
}

/// Tolerant acknowledgment for write endpoints that only return a message
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
