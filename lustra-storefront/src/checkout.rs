//! Checkout flow
//!
//! Turns the resolved cart into an order-creation request, gated on the
//! stored session token, with an explicit confirmation step. Failure
//! never loses the cart: only a confirmed, accepted order clears it.

use crate::session::SessionStore;
use crate::store::CollectionStore;
use crate::view::CollectionView;
use lustra_client::{CommerceApi, HttpClient};
use rust_decimal::Decimal;
use shared::request::OrderLineInput;

/// Totals shown in the confirmation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    pub subtotal: Decimal,
    pub delivery_cost: Decimal,
    pub total: Decimal,
}

/// Result of asking to start a checkout
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutStart {
    /// Confirmation step is open; show these totals
    Confirm(OrderSummary),
    /// No token: send the user to the login entry point, nothing was sent
    RedirectToLogin,
    /// Nothing to order
    EmptyCart,
}

/// Result of confirming an order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Order accepted; the cart has been cleared
    Placed,
    /// Token rejected by the server; it has been purged, cart untouched
    AuthExpired,
    /// Any other failure; cart and token untouched
    Failed(String),
}

/// Checkout state: at most one open confirmation
#[derive(Debug)]
pub struct Checkout {
    delivery_cost: Decimal,
    pending: Option<Vec<OrderLineInput>>,
}

impl Checkout {
    pub fn new(delivery_cost: Decimal) -> Self {
        Self {
            delivery_cost,
            pending: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Open the confirmation step over the currently displayed cart.
    /// Without a token this redirects instead and sends nothing.
    pub fn initiate<S: CollectionStore>(
        &mut self,
        cart: &CollectionView<S>,
        session: &SessionStore,
    ) -> CheckoutStart {
        if !session.is_authenticated() {
            tracing::debug!("Checkout without token, redirecting to login");
            return CheckoutStart::RedirectToLogin;
        }

        let lines: Vec<OrderLineInput> = cart
            .lines()
            .iter()
            .map(|p| OrderLineInput {
                name: p.name.clone(),
                article: p.article.clone(),
                source: p.source.clone(),
                quantity: p.quantity,
                price: p.price,
            })
            .collect();
        if lines.is_empty() {
            return CheckoutStart::EmptyCart;
        }

        let subtotal = cart.total_amount();
        self.pending = Some(lines);
        CheckoutStart::Confirm(OrderSummary {
            subtotal,
            delivery_cost: self.delivery_cost,
            total: subtotal + self.delivery_cost,
        })
    }

    /// Close the confirmation with no side effects.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Submit the pending order with the stored bearer token.
    pub async fn confirm<S: CollectionStore, C: HttpClient>(
        &mut self,
        api: &mut CommerceApi<C>,
        cart: &mut CollectionView<S>,
        session: &mut SessionStore,
    ) -> CheckoutOutcome {
        let Some(lines) = self.pending.clone() else {
            return CheckoutOutcome::Failed("No order awaiting confirmation".to_string());
        };

        api.set_token(session.token().map(str::to_string));
        match api.create_order(lines).await {
            Ok(()) => {
                tracing::info!("Order placed");
                if let Err(e) = cart.clear() {
                    tracing::warn!(error = %e, "Order placed but clearing the cart failed");
                }
                self.pending = None;
                CheckoutOutcome::Placed
            }
            Err(e) if e.is_auth_denied() => {
                tracing::warn!("Order rejected: token no longer valid");
                if let Err(e) = session.clear_token() {
                    tracing::warn!(error = %e, "Failed to persist token purge");
                }
                CheckoutOutcome::AuthExpired
            }
            Err(e) => {
                tracing::warn!(error = %e, "Order submission failed");
                CheckoutOutcome::Failed(e.to_string())
            }
        }
    }
}
