//! Customer order history
//!
//! Read-only projection of the user's orders, plus cancellation requests.
//! Authorization failures purge the stored token so the caller can route
//! to the re-authentication prompt.

use crate::error::{StorefrontError, StorefrontResult};
use crate::session::SessionStore;
use lustra_client::{ClientError, CommerceApi, HttpClient};
use shared::models::Order;

/// The user's orders as last fetched
#[derive(Debug, Default)]
pub struct OrderHistory {
    orders: Vec<Order>,
}

impl OrderHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Fetch the user's orders with the stored token.
    pub async fn refresh<C: HttpClient>(
        &mut self,
        api: &mut CommerceApi<C>,
        session: &mut SessionStore,
    ) -> StorefrontResult<()> {
        api.set_token(session.token().map(str::to_string));
        match api.my_orders().await {
            Ok(orders) => {
                self.orders = orders;
                Ok(())
            }
            Err(e) => Err(auth_or_client(e, session)),
        }
    }

    /// Single order detail.
    pub async fn detail<C: HttpClient>(
        &self,
        api: &mut CommerceApi<C>,
        session: &mut SessionStore,
        order_id: &str,
    ) -> StorefrontResult<Order> {
        api.set_token(session.token().map(str::to_string));
        api.order(order_id)
            .await
            .map_err(|e| auth_or_client(e, session))
    }

    /// Request cancellation; on success the order leaves the local list.
    pub async fn cancel<C: HttpClient>(
        &mut self,
        api: &mut CommerceApi<C>,
        session: &mut SessionStore,
        order_id: &str,
    ) -> StorefrontResult<()> {
        api.set_token(session.token().map(str::to_string));
        match api.cancel_order(order_id).await {
            Ok(()) => {
                self.orders.retain(|o| o.id != order_id);
                tracing::info!(order_id = %order_id, "Order cancelled");
                Ok(())
            }
            Err(e) => Err(auth_or_client(e, session)),
        }
    }
}

/// Map an auth rejection to `AuthExpired` after purging the token;
/// anything else passes through.
fn auth_or_client(e: ClientError, session: &mut SessionStore) -> StorefrontError {
    if e.is_auth_denied() {
        if let Err(io_err) = session.clear_token() {
            tracing::warn!(error = %io_err, "Failed to persist token purge");
        }
        StorefrontError::AuthExpired
    } else {
        StorefrontError::Client(e)
    }
}
