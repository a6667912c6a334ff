//! Lustra Storefront - client-side state over the commerce API
//!
//! The application layer of the storefront: persisted cart/wishlist
//! collections, session credentials, the reconciliation of local
//! collections against the remote catalog, checkout, order history and
//! the admin order board.

pub mod admin;
pub mod checkout;
pub mod config;
pub mod error;
pub mod history;
pub mod logging;
pub mod session;
pub mod store;
pub mod view;

pub use admin::OrderBoard;
pub use checkout::{Checkout, CheckoutOutcome, CheckoutStart, OrderSummary};
pub use config::StorefrontConfig;
pub use error::{StorefrontError, StorefrontResult};
pub use history::OrderHistory;
pub use session::SessionStore;
pub use store::{CART_KEY, CollectionStore, FileCollectionStore, LIKED_KEY, MemoryCollectionStore};
pub use view::{AddOutcome, CollectionView, RefreshTicket, ViewState};

use lustra_client::{CommerceApi, NetworkHttpClient};

/// Everything a storefront session needs, wired together
///
/// Owns one network client, the persisted session and both collections.
/// The cart and the wishlist are independent: there is no ordering
/// between their mutations.
#[derive(Debug)]
pub struct Storefront {
    api: CommerceApi<NetworkHttpClient>,
    session: SessionStore,
    cart: CollectionView<FileCollectionStore>,
    liked: CollectionView<FileCollectionStore>,
    checkout: Checkout,
}

impl Storefront {
    /// Open a storefront session against the configured API and data
    /// directory.
    pub fn open(config: &StorefrontConfig) -> StorefrontResult<Self> {
        let http = NetworkHttpClient::new(&config.client_config())
            .map_err(StorefrontError::Client)?;
        Ok(Self {
            api: CommerceApi::new(http),
            session: SessionStore::load(&config.data_dir),
            cart: CollectionView::new(CART_KEY, FileCollectionStore::new(&config.data_dir)),
            liked: CollectionView::new(LIKED_KEY, FileCollectionStore::new(&config.data_dir)),
            checkout: Checkout::new(config.delivery_cost),
        })
    }

    pub fn api(&self) -> &CommerceApi<NetworkHttpClient> {
        &self.api
    }

    pub fn api_mut(&mut self) -> &mut CommerceApi<NetworkHttpClient> {
        &mut self.api
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionStore {
        &mut self.session
    }

    pub fn cart(&self) -> &CollectionView<FileCollectionStore> {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CollectionView<FileCollectionStore> {
        &mut self.cart
    }

    pub fn liked(&self) -> &CollectionView<FileCollectionStore> {
        &self.liked
    }

    pub fn liked_mut(&mut self) -> &mut CollectionView<FileCollectionStore> {
        &mut self.liked
    }

    /// Resolve the cart against the catalog.
    pub async fn refresh_cart(&mut self) {
        self.cart.refresh(&self.api).await;
    }

    /// Resolve the wishlist against the catalog.
    pub async fn refresh_liked(&mut self) {
        self.liked.refresh(&self.api).await;
    }

    /// Open the checkout confirmation over the current cart.
    pub fn start_checkout(&mut self) -> CheckoutStart {
        self.checkout.initiate(&self.cart, &self.session)
    }

    /// Confirm the pending order.
    pub async fn confirm_order(&mut self) -> CheckoutOutcome {
        self.checkout
            .confirm(&mut self.api, &mut self.cart, &mut self.session)
            .await
    }

    /// Close the checkout confirmation with no side effects.
    pub fn cancel_checkout(&mut self) {
        self.checkout.cancel();
    }
}
