//! Local collection model
//!
//! The persisted cart/wishlist shape: bare product references with a
//! quantity, keyed by the `(article, source)` identity pair. The same
//! struct is the body of the batch-resolution request, so the serialized
//! form is wire-compatible with `POST /api/products/list`.

use serde::{Deserialize, Serialize};

/// One identity + quantity pair within a collection
///
/// Invariant: `quantity >= 1`. An entry that would reach zero is removed
/// from the collection instead of being kept around.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionEntry {
    pub article: String,
    pub source: String,
    pub quantity: u32,
}

impl CollectionEntry {
    pub fn new(article: impl Into<String>, source: impl Into<String>, quantity: u32) -> Self {
        Self {
            article: article.into(),
            source: source.into(),
            quantity,
        }
    }

    /// Identity check: article numbers are only unique per supplier.
    pub fn matches(&self, article: &str, source: &str) -> bool {
        self.article == article && self.source == source
    }
}

/// An ordered set of collection entries (cart or wishlist)
///
/// Insertion order is preserved for stable display. No two entries share
/// an identity; adding an identity twice increments the existing entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Collection {
    pub products: Vec<CollectionEntry>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, article: &str, source: &str) -> Option<&CollectionEntry> {
        self.products.iter().find(|e| e.matches(article, source))
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.products.iter().map(|e| e.quantity).sum()
    }

    /// Add one unit of the identity. An already present identity is
    /// incremented rather than duplicated. Returns the new quantity.
    pub fn add(&mut self, article: &str, source: &str) -> u32 {
        if let Some(entry) = self
            .products
            .iter_mut()
            .find(|e| e.matches(article, source))
        {
            entry.quantity += 1;
            return entry.quantity;
        }
        self.products.push(CollectionEntry::new(article, source, 1));
        1
    }

    /// Increment an existing line. Returns the new quantity, or `None` if
    /// the identity is not in the collection.
    pub fn increase(&mut self, article: &str, source: &str) -> Option<u32> {
        let entry = self
            .products
            .iter_mut()
            .find(|e| e.matches(article, source))?;
        entry.quantity += 1;
        Some(entry.quantity)
    }

    /// Decrement an existing line, floored at 1. Decrease never removes a
    /// line; use [`Collection::remove_one`] for that.
    pub fn decrease(&mut self, article: &str, source: &str) -> Option<u32> {
        let entry = self
            .products
            .iter_mut()
            .find(|e| e.matches(article, source))?;
        if entry.quantity > 1 {
            entry.quantity -= 1;
        }
        Some(entry.quantity)
    }

    /// Remove one unit. At zero the line is deleted entirely. Returns the
    /// remaining quantity (`Some(0)` means the line is gone), or `None`
    /// if the identity was not present.
    pub fn remove_one(&mut self, article: &str, source: &str) -> Option<u32> {
        let idx = self
            .products
            .iter()
            .position(|e| e.matches(article, source))?;
        if self.products[idx].quantity > 1 {
            self.products[idx].quantity -= 1;
            Some(self.products[idx].quantity)
        } else {
            self.products.remove(idx);
            Some(0)
        }
    }

    /// Delete a line regardless of its quantity. Returns whether the
    /// identity was present.
    pub fn remove_line(&mut self, article: &str, source: &str) -> bool {
        let before = self.products.len();
        self.products.retain(|e| !e.matches(article, source));
        self.products.len() != before
    }

    pub fn clear(&mut self) {
        self.products.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_increments_instead_of_duplicating() {
        let mut c = Collection::new();
        assert_eq!(c.add("A1", "S1"), 1);
        assert_eq!(c.add("A1", "S1"), 2);
        assert_eq!(c.len(), 1);
        assert_eq!(c.get("A1", "S1").unwrap().quantity, 2);
    }

    #[test]
    fn identity_is_the_article_source_pair() {
        let mut c = Collection::new();
        c.add("A1", "S1");
        c.add("A1", "S2");
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn decrease_floors_at_one() {
        let mut c = Collection::new();
        c.add("A1", "S1");
        assert_eq!(c.decrease("A1", "S1"), Some(1));
        assert_eq!(c.decrease("A1", "S1"), Some(1));
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn remove_one_deletes_line_at_zero() {
        let mut c = Collection::new();
        c.add("A1", "S1");
        c.add("A1", "S1");
        assert_eq!(c.remove_one("A1", "S1"), Some(1));
        assert_eq!(c.remove_one("A1", "S1"), Some(0));
        assert!(c.is_empty());
        assert_eq!(c.remove_one("A1", "S1"), None);
    }

    #[test]
    fn remove_line_ignores_quantity() {
        let mut c = Collection::new();
        for _ in 0..5 {
            c.add("A1", "S1");
        }
        assert!(c.remove_line("A1", "S1"));
        assert!(c.is_empty());
        assert!(!c.remove_line("A1", "S1"));
    }

    #[test]
    fn quantities_never_reach_zero_under_mutation_sequences() {
        let mut c = Collection::new();
        c.add("A1", "S1");
        c.add("A2", "S1");
        c.increase("A1", "S1");
        c.decrease("A2", "S1");
        c.decrease("A2", "S1");
        c.remove_one("A1", "S1");
        assert!(c.products.iter().all(|e| e.quantity >= 1));
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut c = Collection::new();
        c.add("A2", "S1");
        c.add("A1", "S1");
        c.add("A3", "S2");
        c.increase("A1", "S1");
        let order: Vec<&str> = c.products.iter().map(|e| e.article.as_str()).collect();
        assert_eq!(order, ["A2", "A1", "A3"]);
    }

    #[test]
    fn serializes_as_products_object() {
        let mut c = Collection::new();
        c.add("A1", "S1");
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(
            json,
            r#"{"products":[{"article":"A1","source":"S1","quantity":1}]}"#
        );
    }
}
