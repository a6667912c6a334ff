//! Catalog endpoints: paged browsing, product detail, batch resolution

use super::CommerceApi;
use crate::http::HttpClient;
use crate::{ClientError, ClientResult};
use shared::collection::CollectionEntry;
use shared::models::CatalogProduct;
use shared::request::{ProductQuery, ResolveRequest};
use shared::response::{ProductPage, ResolveResponse};
use urlencoding::encode;

impl<C: HttpClient> CommerceApi<C> {
    /// One page of a brand's catalog, with optional name and price filters.
    pub async fn products(&self, brand: &str, query: &ProductQuery) -> ClientResult<ProductPage> {
        let mut path = format!(
            "api/products/{}?page={}&limit={}",
            encode(brand),
            query.page,
            query.limit
        );
        if let Some(name) = &query.name {
            if !name.is_empty() {
                path.push_str(&format!("&name={}", encode(name)));
            }
        }
        if let Some(min) = query.min_price {
            path.push_str(&format!("&minPrice={}", min));
        }
        if let Some(max) = query.max_price {
            path.push_str(&format!("&maxPrice={}", max));
        }
        self.http().get(&path).await
    }

    /// Single product detail by supplier and article number.
    pub async fn product(&self, supplier: &str, article: &str) -> ClientResult<CatalogProduct> {
        let path = format!("api/products/{}/{}", encode(supplier), encode(article));
        self.http().get(&path).await
    }

    /// Batch-resolve collection entries into full catalog records.
    ///
    /// One request for the whole collection; failure is all-or-nothing.
    /// Identities the catalog no longer carries are absent from the
    /// result, which is not an error. Callers must not pass an empty
    /// slice — check for the empty collection first and render the empty
    /// state instead.
    pub async fn resolve(&self, entries: &[CollectionEntry]) -> ClientResult<Vec<CatalogProduct>> {
        if entries.is_empty() {
            return Err(ClientError::Validation(
                "resolve called with an empty collection".to_string(),
            ));
        }

        tracing::debug!(entries = entries.len(), "Resolving collection entries");
        let request = ResolveRequest {
            products: entries.to_vec(),
        };
        let response: ResolveResponse = self.http().post("api/products/list", &request).await?;

        if response.products.len() < entries.len() {
            tracing::debug!(
                requested = entries.len(),
                resolved = response.products.len(),
                "Some entries no longer resolve against the catalog"
            );
        }
        Ok(response.products)
    }
}
