//! Admin order board
//!
//! Mirrors every order in the system onto a locally editable list with
//! independent per-order and per-line status selectors. A status change
//! issues the remote update first and patches the local list only after
//! the server accepted it, so a failed update never leaves the board
//! showing a state the backend does not have.

use lustra_client::{ClientResult, CommerceApi, HttpClient};
use shared::models::{Order, OrderStatus, UserInfo};

/// Admin projection over all orders
#[derive(Debug, Default)]
pub struct OrderBoard {
    orders: Vec<Order>,
}

impl OrderBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Orders whose id contains the search term, case-insensitive.
    pub fn filter(&self, term: &str) -> Vec<&Order> {
        let needle = term.to_lowercase();
        self.orders
            .iter()
            .filter(|o| o.id.to_lowercase().contains(&needle))
            .collect()
    }

    /// Fetch every order for the board.
    pub async fn refresh<C: HttpClient>(&mut self, api: &CommerceApi<C>) -> ClientResult<()> {
        self.orders = api.all_orders().await?;
        Ok(())
    }

    /// Transition an order's status, remote first.
    pub async fn set_order_status<C: HttpClient>(
        &mut self,
        api: &CommerceApi<C>,
        order_id: &str,
        status: OrderStatus,
    ) -> ClientResult<()> {
        api.set_order_status(order_id, status).await?;
        if let Some(order) = self.orders.iter_mut().find(|o| o.id == order_id) {
            order.status = status;
        }
        tracing::info!(order_id = %order_id, ?status, "Order status updated");
        Ok(())
    }

    /// Transition one line's status within an order, remote first.
    pub async fn set_line_status<C: HttpClient>(
        &mut self,
        api: &CommerceApi<C>,
        order_id: &str,
        article: &str,
        status: OrderStatus,
    ) -> ClientResult<()> {
        api.set_line_status(order_id, article, status).await?;
        if let Some(order) = self.orders.iter_mut().find(|o| o.id == order_id) {
            if let Some(line) = order.products.iter_mut().find(|l| l.article == article) {
                line.status = status;
            }
        }
        tracing::info!(order_id = %order_id, article = %article, ?status, "Line status updated");
        Ok(())
    }

    /// Customer profile behind an order.
    pub async fn customer<C: HttpClient>(
        &self,
        api: &CommerceApi<C>,
        user_id: &str,
    ) -> ClientResult<UserInfo> {
        api.user(user_id).await
    }
}
