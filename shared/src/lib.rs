//! Shared types for the Lustra storefront
//!
//! Common types used across the client and storefront crates: catalog
//! products, orders, local collections and the request/response payloads
//! of the commerce API.

pub mod collection;
pub mod models;
pub mod request;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use collection::{Collection, CollectionEntry};
pub use models::{CatalogProduct, Order, OrderLine, OrderStatus, UserInfo};
