//! Fake commerce backend shared by the storefront integration tests.
//!
//! A small axum router with a fixed two-product catalog (A1/S1 at 500,
//! A2/S1 at 250) and an in-memory order list, driven through the
//! in-process oneshot client.
#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use rust_decimal::Decimal;
use shared::models::{CatalogProduct, Order, OrderStatus};
use shared::request::{CreateOrderRequest, ResolveRequest, StatusUpdateRequest};
use shared::response::{MessageResponse, OrderListResponse, ResolveResponse};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// The only token the fake backend accepts.
pub const TOKEN: &str = "valid-token";

#[derive(Default)]
pub struct Backend {
    pub orders: Mutex<Vec<Order>>,
    pub created_orders: Mutex<Vec<CreateOrderRequest>>,
    pub order_requests: AtomicUsize,
    pub fail_resolution: AtomicBool,
    pub fail_orders: AtomicBool,
    pub fail_updates: AtomicBool,
}

pub fn catalog_product(article: &str, source: &str, price: i64, quantity: u32) -> CatalogProduct {
    CatalogProduct {
        record_id: format!("id-{}-{}", source, article),
        article: article.to_string(),
        name: format!("Fixture {}", article),
        source: source.to_string(),
        stock: "Остаток: 5 шт.".to_string(),
        price: Decimal::new(price, 0),
        image_address: format!("https://img.example/{}.jpg", article),
        quantity,
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {}", TOKEN))
}

async fn resolve(
    State(backend): State<Arc<Backend>>,
    Json(request): Json<ResolveRequest>,
) -> Result<Json<ResolveResponse>, StatusCode> {
    if backend.fail_resolution.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let products = request
        .products
        .iter()
        .filter_map(|entry| match (entry.article.as_str(), entry.source.as_str()) {
            ("A1", "S1") => Some(catalog_product("A1", "S1", 500, entry.quantity)),
            ("A2", "S1") => Some(catalog_product("A2", "S1", 250, entry.quantity)),
            _ => None,
        })
        .collect();
    Ok(Json(ResolveResponse { products }))
}

async fn add_order(
    State(backend): State<Arc<Backend>>,
    headers: HeaderMap,
    Json(request): Json<CreateOrderRequest>,
) -> Result<Json<MessageResponse>, StatusCode> {
    backend.order_requests.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return Err(StatusCode::FORBIDDEN);
    }
    if backend.fail_orders.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    backend.created_orders.lock().unwrap().push(request);
    Ok(Json(MessageResponse {
        message: Some("created".to_string()),
    }))
}

async fn my_orders(
    State(backend): State<Arc<Backend>>,
    headers: HeaderMap,
) -> Result<Json<OrderListResponse>, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::FORBIDDEN);
    }
    Ok(Json(OrderListResponse {
        orders: backend.orders.lock().unwrap().clone(),
    }))
}

async fn cancel_order(
    State(backend): State<Arc<Backend>>,
    headers: HeaderMap,
    Path(order_id): Path<String>,
) -> Result<Json<MessageResponse>, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::FORBIDDEN);
    }
    backend.orders.lock().unwrap().retain(|o| o.id != order_id);
    Ok(Json(MessageResponse::default()))
}

async fn order_detail(
    State(backend): State<Arc<Backend>>,
    headers: HeaderMap,
    Path(order_id): Path<String>,
) -> Result<Json<shared::response::OrderDetailResponse>, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::FORBIDDEN);
    }
    let order = backend
        .orders
        .lock()
        .unwrap()
        .iter()
        .find(|o| o.id == order_id)
        .cloned()
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(shared::response::OrderDetailResponse { order }))
}

async fn all_orders(State(backend): State<Arc<Backend>>) -> Json<OrderListResponse> {
    Json(OrderListResponse {
        orders: backend.orders.lock().unwrap().clone(),
    })
}

async fn set_order_status(
    State(backend): State<Arc<Backend>>,
    Path(order_id): Path<String>,
    Json(request): Json<StatusUpdateRequest>,
) -> Result<Json<MessageResponse>, StatusCode> {
    if backend.fail_updates.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let mut orders = backend.orders.lock().unwrap();
    let order = orders
        .iter_mut()
        .find(|o| o.id == order_id)
        .ok_or(StatusCode::NOT_FOUND)?;
    order.status = request.status;
    Ok(Json(MessageResponse::default()))
}

async fn set_line_status(
    State(backend): State<Arc<Backend>>,
    Path((order_id, article)): Path<(String, String)>,
    Json(request): Json<StatusUpdateRequest>,
) -> Result<Json<MessageResponse>, StatusCode> {
    if backend.fail_updates.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let mut orders = backend.orders.lock().unwrap();
    let line = orders
        .iter_mut()
        .find(|o| o.id == order_id)
        .and_then(|o| o.products.iter_mut().find(|l| l.article == article))
        .ok_or(StatusCode::NOT_FOUND)?;
    line.status = request.status;
    Ok(Json(MessageResponse::default()))
}

/// Build the fake backend and its router.
pub fn backend() -> (Arc<Backend>, Router) {
    let backend = Arc::new(Backend::default());
    let router = Router::new()
        .route("/api/products/list", post(resolve))
        .route("/api/orders/add-order", post(add_order))
        .route("/api/orders", get(my_orders))
        .route(
            "/api/orders/{id}",
            get(order_detail).delete(cancel_order),
        )
        .route("/api/all-orders", get(all_orders))
        .route("/api/orders/{id}/status", patch(set_order_status))
        .route(
            "/api/orders/{id}/products/{article}/status",
            patch(set_line_status),
        )
        .with_state(backend.clone());
    (backend, router)
}

/// A processing order with one A1/S1 line, for the admin/history tests.
pub fn seed_order(id: &str) -> Order {
    Order {
        id: id.to_string(),
        products: vec![shared::models::OrderLine {
            article: "A1".to_string(),
            source: "S1".to_string(),
            name: "Fixture A1".to_string(),
            quantity: 2,
            price: Decimal::new(500, 0),
            status: OrderStatus::Processing,
        }],
        total_amount: Decimal::new(1000, 0),
        status: OrderStatus::Processing,
        user_id: Some("u1".to_string()),
        created_at: None,
    }
}
