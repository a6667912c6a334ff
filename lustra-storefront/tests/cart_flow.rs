// End-to-end reconciliation tests: persisted collection -> batch
// resolution -> displayed list -> mutations, over the in-process client.

mod common;

use common::backend;
use lustra_client::{CommerceApi, OneshotHttpClient};
use lustra_storefront::store::{CART_KEY, CollectionStore, LIKED_KEY, MemoryCollectionStore};
use lustra_storefront::view::{CollectionView, ViewState};
use rust_decimal::Decimal;
use shared::collection::Collection;
use std::sync::atomic::Ordering;

fn seeded_store(entries: &[(&str, &str, u32)]) -> MemoryCollectionStore {
    let mut store = MemoryCollectionStore::new();
    let mut collection = Collection::new();
    for (article, source, quantity) in entries {
        collection.add(article, source);
        for _ in 1..*quantity {
            collection.increase(article, source);
        }
    }
    store.save(CART_KEY, &collection).unwrap();
    store
}

#[tokio::test]
async fn cart_resolves_and_mutates_through_the_scenario() {
    let (_backend, router) = backend();
    let api = CommerceApi::new(OneshotHttpClient::new(router));

    // {A1/S1 x2}, catalog resolves A1/S1 at 500.
    let mut cart = CollectionView::new(CART_KEY, seeded_store(&[("A1", "S1", 2)]));
    cart.refresh(&api).await;

    assert!(matches!(cart.state(), ViewState::Ready(_)));
    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.total_amount(), Decimal::new(1000, 0));

    cart.increase("A1", "S1").unwrap();
    assert_eq!(cart.total_amount(), Decimal::new(1500, 0));

    cart.decrease("A1", "S1").unwrap();
    cart.decrease("A1", "S1").unwrap();
    // A further decrease is floored at one unit.
    cart.decrease("A1", "S1").unwrap();
    assert_eq!(cart.lines()[0].quantity, 1);
    assert_eq!(cart.total_amount(), Decimal::new(500, 0));

    cart.remove_one("A1", "S1").unwrap();
    assert_eq!(*cart.state(), ViewState::Empty);
    assert!(cart.collection().is_empty());
}

#[tokio::test]
async fn delisted_entries_are_hidden_but_stay_persisted() {
    let (_backend, router) = backend();
    let api = CommerceApi::new(OneshotHttpClient::new(router));

    let mut cart = CollectionView::new(
        CART_KEY,
        seeded_store(&[("A1", "S1", 1), ("GONE", "S1", 3)]),
    );
    cart.refresh(&api).await;

    // Only the resolvable identity is displayed...
    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.lines()[0].article, "A1");
    // ...but the stale entry is not healed out of the collection; the
    // next load will try it again.
    assert_eq!(cart.collection().len(), 2);
    assert_eq!(cart.collection().get("GONE", "S1").unwrap().quantity, 3);
}

#[tokio::test]
async fn resolution_failure_shows_error_and_keeps_the_collection() {
    let (backend, router) = backend();
    let api = CommerceApi::new(OneshotHttpClient::new(router));
    backend.fail_resolution.store(true, Ordering::SeqCst);

    let mut cart = CollectionView::new(CART_KEY, seeded_store(&[("A1", "S1", 2)]));
    cart.refresh(&api).await;

    assert!(matches!(cart.state(), ViewState::Error(_)));
    assert!(cart.lines().is_empty());
    assert_eq!(cart.collection().len(), 1);

    // The error is not sticky: once the backend recovers, a new refresh
    // resolves normally.
    backend.fail_resolution.store(false, Ordering::SeqCst);
    cart.refresh(&api).await;
    assert_eq!(cart.lines().len(), 1);
}

#[tokio::test]
async fn empty_cart_never_calls_resolve() {
    let (_backend, router) = backend();
    let api = CommerceApi::new(OneshotHttpClient::new(router));

    let mut cart = CollectionView::new(CART_KEY, MemoryCollectionStore::new());
    cart.refresh(&api).await;
    assert_eq!(*cart.state(), ViewState::Empty);
}

#[tokio::test]
async fn cart_and_wishlist_share_the_contract_but_not_the_data() {
    let (_backend, router) = backend();
    let api = CommerceApi::new(OneshotHttpClient::new(router));

    let mut store = MemoryCollectionStore::new();
    let mut cart_data = Collection::new();
    cart_data.add("A1", "S1");
    store.save(CART_KEY, &cart_data).unwrap();
    let mut liked_data = Collection::new();
    liked_data.add("A2", "S1");
    store.save(LIKED_KEY, &liked_data).unwrap();

    let mut cart = CollectionView::new(CART_KEY, store.clone());
    let mut liked = CollectionView::new(LIKED_KEY, store);
    cart.refresh(&api).await;
    liked.refresh(&api).await;

    assert_eq!(cart.lines()[0].article, "A1");
    assert_eq!(liked.lines()[0].article, "A2");

    // Clearing the wishlist leaves the cart alone.
    liked.clear().unwrap();
    assert_eq!(*liked.state(), ViewState::Empty);
    assert_eq!(cart.lines().len(), 1);
}
