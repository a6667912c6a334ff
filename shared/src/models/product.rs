//! Product Model

use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Resolved catalog product
///
/// A point-in-time snapshot of a catalog record as returned by the remote
/// API. `quantity` is copied from the matching collection entry at
/// resolution time; everything else may go stale by the time an order is
/// placed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogProduct {
    /// Catalog record id
    #[serde(rename = "_id")]
    pub record_id: String,
    /// Supplier article number
    pub article: String,
    pub name: String,
    /// Supplier identifier (article numbers are only unique per supplier)
    pub source: String,
    /// Free-form stock label, e.g. "5 шт."
    pub stock: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(rename = "imageAddress")]
    pub image_address: String,
    pub quantity: u32,
}

impl CatalogProduct {
    /// Units in stock, parsed from the first digit run of the stock label.
    /// A label with no digits counts as out of stock.
    pub fn stock_count(&self) -> u32 {
        static DIGITS: OnceLock<Regex> = OnceLock::new();
        let re = DIGITS.get_or_init(|| Regex::new(r"\d+").expect("valid regex"));
        re.find(&self.stock)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    }

    /// Line total for display: unit price times quantity.
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}
