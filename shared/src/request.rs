//! Request payloads for the commerce API

use crate::collection::CollectionEntry;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/products/list` — batch catalog resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveRequest {
    pub products: Vec<CollectionEntry>,
}

/// One cart line as submitted at checkout
///
/// Prices are the client's resolved snapshot; the server re-prices on its
/// side, these values are informational.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLineInput {
    pub name: String,
    pub article: String,
    pub source: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Body of `POST /api/orders/add-order`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub products: Vec<OrderLineInput>,
}

/// Body of the admin `PATCH .../status` endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: crate::models::OrderStatus,
}

/// Body of `POST /api/reset-password`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
}

/// Query parameters of the paged catalog listing
#[derive(Debug, Clone)]
pub struct ProductQuery {
    pub page: u32,
    pub limit: u32,
    pub name: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 12,
            name: None,
            min_price: None,
            max_price: None,
        }
    }
}

impl ProductQuery {
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn price_range(mut self, min: Decimal, max: Decimal) -> Self {
        self.min_price = Some(min);
        self.max_price = Some(max);
        self
    }
}
