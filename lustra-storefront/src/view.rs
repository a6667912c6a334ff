//! Collection reconciliation
//!
//! `CollectionView` keeps one persisted collection (cart or wishlist) and
//! its displayed, catalog-resolved list in lockstep. Resolution is remote
//! and asynchronous; every mutation is local arithmetic that is mirrored
//! into the store before it returns, so a reload right after any action
//! already sees it.

use crate::store::CollectionStore;
use lustra_client::{ClientResult, CommerceApi, HttpClient};
use rust_decimal::Decimal;
use shared::collection::{Collection, CollectionEntry};
use shared::models::CatalogProduct;
use std::io;

/// Display state of a collection
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// Nothing loaded yet
    Idle,
    /// Resolution request in flight
    Loading,
    /// The persisted collection has no entries
    Empty,
    /// Resolution succeeded; this is the displayed list
    Ready(Vec<CatalogProduct>),
    /// Resolution failed; nothing is displayed
    Error(String),
}

/// Outcome of an add-to-collection attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Line added or incremented; carries the new quantity
    Added(u32),
    /// Rejected: the catalog snapshot says the product is out of stock
    OutOfStock,
}

/// Handle for one in-flight resolution
///
/// Carries the entries snapshot to resolve and the epoch it was started
/// under. A ticket whose epoch has been superseded (a newer refresh or
/// any mutation happened meanwhile) is discarded on completion instead
/// of being applied to a state it no longer describes.
#[derive(Debug)]
pub struct RefreshTicket {
    epoch: u64,
    entries: Vec<CollectionEntry>,
}

impl RefreshTicket {
    pub fn entries(&self) -> &[CollectionEntry] {
        &self.entries
    }
}

/// One persisted collection plus its displayed resolution
#[derive(Debug)]
pub struct CollectionView<S: CollectionStore> {
    key: String,
    store: S,
    collection: Collection,
    state: ViewState,
    epoch: u64,
}

impl<S: CollectionStore> CollectionView<S> {
    pub fn new(key: impl Into<String>, store: S) -> Self {
        let key = key.into();
        let collection = store.load(&key);
        Self {
            key,
            store,
            collection,
            state: ViewState::Idle,
            epoch: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The persisted entries as currently held in memory.
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// The displayed lines; empty unless the view is `Ready`.
    pub fn lines(&self) -> &[CatalogProduct] {
        match &self.state {
            ViewState::Ready(lines) => lines,
            _ => &[],
        }
    }

    /// Σ price × quantity over the displayed lines.
    pub fn total_amount(&self) -> Decimal {
        self.lines().iter().map(CatalogProduct::line_total).sum()
    }

    /// Start a resolution pass: reload the persisted collection and hand
    /// out a ticket for the remote call. Returns `None` when the
    /// collection is empty — the view goes straight to `Empty` and
    /// resolve must not be called at all.
    pub fn begin_refresh(&mut self) -> Option<RefreshTicket> {
        self.collection = self.store.load(&self.key);
        self.epoch += 1;

        if self.collection.is_empty() {
            self.state = ViewState::Empty;
            return None;
        }

        self.state = ViewState::Loading;
        Some(RefreshTicket {
            epoch: self.epoch,
            entries: self.collection.products.clone(),
        })
    }

    /// Apply the outcome of a resolution started with `begin_refresh`.
    /// Stale tickets are dropped: the state they would overwrite has
    /// moved on.
    pub fn complete_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: ClientResult<Vec<CatalogProduct>>,
    ) {
        if ticket.epoch != self.epoch {
            tracing::debug!(key = %self.key, "Discarding stale resolution result");
            return;
        }
        match result {
            Ok(lines) => {
                tracing::debug!(key = %self.key, lines = lines.len(), "Collection resolved");
                self.state = ViewState::Ready(lines);
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Collection resolution failed");
                self.state = ViewState::Error(e.to_string());
            }
        }
    }

    /// Load and resolve in one step.
    pub async fn refresh<C: HttpClient>(&mut self, api: &CommerceApi<C>) {
        let Some(ticket) = self.begin_refresh() else {
            return;
        };
        let result = api.resolve(ticket.entries()).await;
        self.complete_refresh(ticket, result);
    }

    // ========== Mutations ==========
    //
    // Each mutation updates the in-memory collection, persists it, and
    // mirrors the change into the displayed list, in that order. Any
    // in-flight resolution is invalidated so it cannot clobber the
    // mutated state when it lands.

    /// Add one unit from a catalog snapshot. Stock is checked here and
    /// only here: in-cart `increase` deliberately does not re-check it.
    pub fn add(&mut self, product: &CatalogProduct) -> io::Result<AddOutcome> {
        if product.stock_count() == 0 {
            tracing::debug!(article = %product.article, "Rejected add: out of stock");
            return Ok(AddOutcome::OutOfStock);
        }

        let quantity = self.collection.add(&product.article, &product.source);
        self.persist()?;

        let mut line = product.clone();
        line.quantity = quantity;
        if let ViewState::Ready(lines) = &mut self.state {
            if let Some(existing) = lines
                .iter_mut()
                .find(|l| l.article == product.article && l.source == product.source)
            {
                existing.quantity = quantity;
            } else {
                lines.push(line);
            }
        } else if matches!(self.state, ViewState::Empty) {
            self.state = ViewState::Ready(vec![line]);
        }
        Ok(AddOutcome::Added(quantity))
    }

    /// Displayed and persisted quantity += 1. No upper bound: stock
    /// sufficiency is only checked at add time (known limitation,
    /// mirrored from the source behavior).
    pub fn increase(&mut self, article: &str, source: &str) -> io::Result<()> {
        if self.collection.increase(article, source).is_none() {
            return Ok(());
        }
        self.persist()?;
        self.patch_line(article, source, |q| Some(q + 1));
        Ok(())
    }

    /// Displayed and persisted quantity -= 1, floored at 1. Decrease
    /// never removes the line; that takes an explicit remove.
    pub fn decrease(&mut self, article: &str, source: &str) -> io::Result<()> {
        if self.collection.decrease(article, source).is_none() {
            return Ok(());
        }
        self.persist()?;
        self.patch_line(article, source, |q| Some(q.saturating_sub(1).max(1)));
        Ok(())
    }

    /// Remove one unit; a line reaching zero disappears from both the
    /// displayed list and the store in the same step.
    pub fn remove_one(&mut self, article: &str, source: &str) -> io::Result<()> {
        if self.collection.remove_one(article, source).is_none() {
            return Ok(());
        }
        self.persist()?;
        self.patch_line(article, source, |q| (q > 1).then(|| q - 1));
        self.sync_empty_state();
        Ok(())
    }

    /// Delete a line regardless of quantity.
    pub fn remove_line(&mut self, article: &str, source: &str) -> io::Result<()> {
        if !self.collection.remove_line(article, source) {
            return Ok(());
        }
        self.persist()?;
        self.patch_line(article, source, |_| None);
        self.sync_empty_state();
        Ok(())
    }

    /// Empty the collection and the display.
    pub fn clear(&mut self) -> io::Result<()> {
        self.collection.clear();
        self.epoch += 1;
        self.store.clear(&self.key)?;
        self.state = ViewState::Empty;
        tracing::debug!(key = %self.key, "Collection cleared");
        Ok(())
    }

    fn persist(&mut self) -> io::Result<()> {
        self.epoch += 1;
        self.store.save(&self.key, &self.collection)
    }

    /// Apply `f` to the displayed quantity of the matching line.
    /// `None` removes the line.
    fn patch_line(&mut self, article: &str, source: &str, f: impl Fn(u32) -> Option<u32>) {
        if let ViewState::Ready(lines) = &mut self.state {
            if let Some(idx) = lines
                .iter()
                .position(|l| l.article == article && l.source == source)
            {
                match f(lines[idx].quantity) {
                    Some(quantity) => lines[idx].quantity = quantity,
                    None => {
                        lines.remove(idx);
                    }
                }
            }
        }
    }

    fn sync_empty_state(&mut self) {
        if self.collection.is_empty() {
            self.state = ViewState::Empty;
        }
    }
}
