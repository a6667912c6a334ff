//! In-process HTTP client
//!
//! Drives an axum `Router` directly through tower's oneshot call, so the
//! whole API surface can be exercised without a network. Enabled with the
//! "in-process" feature; used heavily by the storefront tests.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::{Arc, RwLock};
use tower::ServiceExt;

use crate::http::HttpClient;
use crate::{ClientError, ClientResult};

/// In-process client over an already-built `Router`
///
/// Clones share the token, mirroring how one network client is shared
/// between views.
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
    token: Arc<RwLock<Option<String>>>,
}

impl OneshotHttpClient {
    /// Wrap a fully-initialized `Router` (state already applied).
    pub fn new(router: Router) -> Self {
        Self {
            router,
            token: Arc::new(RwLock::new(None)),
        }
    }

    fn current_token(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }

    fn build_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> ClientResult<Request<Body>> {
        let uri = format!("/{}", path.trim_start_matches('/'));
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = self.current_token() {
            builder = builder.header(http::header::AUTHORIZATION, format!("Bearer {}", token));
        }

        builder
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(body.map(Body::from).unwrap_or_else(Body::empty))
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body_bytes).to_string();
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        Ok(serde_json::from_slice(&body_bytes)?)
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::GET, path, None)?;
        self.execute(request).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + std::marker::Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let bytes = serde_json::to_vec(body)?;
        let request = self.build_request(Method::POST, path, Some(bytes))?;
        self.execute(request).await
    }

    async fn patch<T: DeserializeOwned, B: serde::Serialize + std::marker::Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let bytes = serde_json::to_vec(body)?;
        let request = self.build_request(Method::PATCH, path, Some(bytes))?;
        self.execute(request).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::DELETE, path, None)?;
        self.execute(request).await
    }

    fn set_token(&mut self, token: Option<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = token;
        }
    }

    fn token(&self) -> Option<String> {
        self.current_token()
    }
}
