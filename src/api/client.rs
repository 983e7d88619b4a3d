//! Provider REST API client.
//!
//! Single chokepoint for every call to the inventory intelligence provider.
//! Responses are parsed as [`ResponseEnvelope`]s regardless of status code;
//! failures are normalized into [`RemoteError`]. No retries are attempted
//! here: retry policy belongs to the caller.

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::envelope::ResponseEnvelope;
use super::types::{BatchMarkdownRequest, InventoryQuery, ServiceHealth};
use crate::domain::{
    AnalyticsSummary, ForecastSeries, InventoryItem, MarkdownSuggestion, ProductId, SalesHistory,
};
use crate::error::RemoteError;

/// HTTP client for the inventory intelligence provider.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    client: Client,
    base_url: String,
}

impl ProviderClient {
    /// Create a new client with the given base URL
    /// (e.g., `http://localhost:5000`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn health(&self) -> Result<ServiceHealth, RemoteError> {
        self.get("/health").await
    }

    /// Fetch the inventory snapshot, optionally filtered server-side.
    pub async fn inventory(
        &self,
        query: &InventoryQuery,
    ) -> Result<Vec<InventoryItem>, RemoteError> {
        let path = format!("/inventory{}", query.to_query_string());
        self.get(&path).await
    }

    /// Fetch the demand forecast for one product over `days`.
    pub async fn forecast(
        &self,
        product_id: &ProductId,
        days: u32,
    ) -> Result<ForecastSeries, RemoteError> {
        let path = format!("/forecast/{product_id}?days={days}");
        self.get(&path).await
    }

    /// Fetch the markdown suggestion for one product.
    pub async fn markdown_suggestion(
        &self,
        product_id: &ProductId,
    ) -> Result<MarkdownSuggestion, RemoteError> {
        let path = format!("/markdown/{product_id}");
        self.get(&path).await
    }

    /// Commit a markdown decision upstream. The provider echoes the saved
    /// suggestion; acting on it is the provider's business.
    pub async fn save_markdown(
        &self,
        product_id: &ProductId,
    ) -> Result<MarkdownSuggestion, RemoteError> {
        let path = format!("/markdown/{product_id}");
        self.request(Method::POST, &path, None::<&()>).await
    }

    /// Fetch markdown suggestions for a set of products.
    pub async fn batch_markdown(
        &self,
        product_ids: &[ProductId],
    ) -> Result<Vec<MarkdownSuggestion>, RemoteError> {
        let body = BatchMarkdownRequest {
            product_ids: product_ids.to_vec(),
        };
        self.request(Method::POST, "/markdown/batch", Some(&body))
            .await
    }

    pub async fn analytics_summary(&self) -> Result<AnalyticsSummary, RemoteError> {
        self.get("/analytics/summary").await
    }

    /// Fetch recorded sales for one product over `days`.
    pub async fn sales_history(
        &self,
        product_id: &ProductId,
        days: u32,
    ) -> Result<SalesHistory, RemoteError> {
        let path = format!("/products/{product_id}/sales-history?days={days}");
        self.get(&path).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RemoteError> {
        self.request(Method::GET, path, None::<&()>).await
    }

    async fn request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, RemoteError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(method = %method, url = %url, "Provider request");

        let mut request = self
            .client
            .request(method, &url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let envelope: ResponseEnvelope<T> = response
            .json()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))?;

        debug!(url = %url, status, success = envelope.success, "Provider response");

        envelope.into_result(status)
    }
}
