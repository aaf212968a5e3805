//! 商品APIクライアント

use super::params::query_params;
use super::wire::{ApiErrorBody, ProductListResponse};
use crate::catalog::CategoryDirectory;
use crate::config::{AuthProvider, HttpConfig};
use crate::error::{CatalogError, Result};
use crate::query::FilterState;
use crate::source::{ProductSource, QueryResult};
use reqwest::header::COOKIE;
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;

/// 商品一覧エンドポイント
pub const PRODUCTS_PATH: &str = "/api/v1/product/products";

/// リモートソース
pub struct RemoteSource {
    http: Client,
    base_url: String,
    auth: AuthProvider,
    directory: CategoryDirectory,
}

impl RemoteSource {
    pub fn new(
        base_url: impl Into<String>,
        config: &HttpConfig,
        auth: AuthProvider,
        directory: CategoryDirectory,
    ) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(CatalogError::Config("api_base_url is empty".to_string()));
        }

        Ok(Self {
            http: config.build_client()?,
            base_url,
            auth,
            directory,
        })
    }

    fn products_url(&self) -> String {
        format!("{}{}", self.base_url, PRODUCTS_PATH)
    }

    async fn fetch(&self, filter: &FilterState) -> Result<QueryResult> {
        let params = query_params(filter, &self.directory)?;
        let url = self.products_url();
        tracing::debug!(
            url = %url,
            ?params,
            authenticated = self.auth.session_token().is_some(),
            "requesting products"
        );

        let mut req = self.http.get(&url).query(&params);
        if let Some(cookie) = self.auth.cookie_header() {
            req = req.header(COOKIE, cookie);
        }

        let response = req.send().await?;
        let status = response.status().as_u16();

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = ApiErrorBody::message_from(&body);
            tracing::warn!(status, message = %message, "product request failed");
            return Err(CatalogError::Api { status, message });
        }

        let body = response.text().await?;
        let list: ProductListResponse = serde_json::from_str(&body)?;
        let items = list
            .products
            .into_iter()
            .map(|dto| dto.into_product(&self.directory))
            .collect();

        Ok(QueryResult {
            items,
            total_count: list.total_count,
        })
    }
}

impl ProductSource for RemoteSource {
    fn name(&self) -> &'static str {
        "remote"
    }

    fn query<'a>(
        &'a self,
        filter: &'a FilterState,
    ) -> Pin<Box<dyn Future<Output = Result<QueryResult>> + Send + 'a>> {
        Box::pin(self.fetch(filter))
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
