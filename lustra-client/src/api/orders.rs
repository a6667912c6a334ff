//! Order endpoints: checkout submission, history, admin status updates

use super::CommerceApi;
use crate::ClientResult;
use crate::http::HttpClient;
use shared::models::{Order, OrderStatus};
use shared::request::{CreateOrderRequest, OrderLineInput, StatusUpdateRequest};
use shared::response::{MessageResponse, OrderDetailResponse, OrderListResponse};
use urlencoding::encode;

impl<C: HttpClient> CommerceApi<C> {
    /// Create an order from resolved cart lines. Requires a bearer token.
    pub async fn create_order(&self, lines: Vec<OrderLineInput>) -> ClientResult<()> {
        tracing::debug!(lines = lines.len(), "Submitting order");
        let request = CreateOrderRequest { products: lines };
        let _: MessageResponse = self.http().post("api/orders/add-order", &request).await?;
        Ok(())
    }

    /// Current user's orders. Requires a bearer token.
    pub async fn my_orders(&self) -> ClientResult<Vec<Order>> {
        let response: OrderListResponse = self.http().get("api/orders").await?;
        Ok(response.orders)
    }

    /// Order detail. Requires a bearer token.
    pub async fn order(&self, order_id: &str) -> ClientResult<Order> {
        let path = format!("api/orders/{}", encode(order_id));
        let response: OrderDetailResponse = self.http().get(&path).await?;
        Ok(response.order)
    }

    /// Request cancellation of an order. Requires a bearer token.
    pub async fn cancel_order(&self, order_id: &str) -> ClientResult<()> {
        let path = format!("api/orders/{}", encode(order_id));
        let _: MessageResponse = self.http().delete(&path).await?;
        Ok(())
    }

    // ========== Admin ==========

    /// Every order in the system, for the admin board.
    pub async fn all_orders(&self) -> ClientResult<Vec<Order>> {
        let response: OrderListResponse = self.http().get("api/all-orders").await?;
        Ok(response.orders)
    }

    /// Transition an order's status.
    pub async fn set_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> ClientResult<()> {
        let path = format!("api/orders/{}/status", encode(order_id));
        let _: MessageResponse = self
            .http()
            .patch(&path, &StatusUpdateRequest { status })
            .await?;
        Ok(())
    }

    /// Transition a single line's status within an order.
    pub async fn set_line_status(
        &self,
        order_id: &str,
        article: &str,
        status: OrderStatus,
    ) -> ClientResult<()> {
        let path = format!(
            "api/orders/{}/products/{}/status",
            encode(order_id),
            encode(article)
        );
        let _: MessageResponse = self
            .http()
            .patch(&path, &StatusUpdateRequest { status })
            .await?;
        Ok(())
    }
}
