//! Concrete fetchers binding each orchestrated resource to the provider
//! client.

use async_trait::async_trait;

use super::fetcher::ResourceFetcher;
use crate::api::{InventoryQuery, ProviderClient, ServiceHealth};
use crate::domain::{
    AnalyticsSummary, ForecastSeries, InventoryItem, MarkdownSuggestion, ProductId, SalesHistory,
};
use crate::error::RemoteError;

/// Input key for forecast fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastRequest {
    pub product_id: ProductId,
    pub days: u32,
}

/// Input key for sales-history fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesHistoryRequest {
    pub product_id: ProductId,
    pub days: u32,
}

pub struct InventoryFetcher {
    client: ProviderClient,
}

impl InventoryFetcher {
    pub fn new(client: ProviderClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResourceFetcher for InventoryFetcher {
    type Key = InventoryQuery;
    type Output = Vec<InventoryItem>;

    async fn fetch(&self, key: &InventoryQuery) -> Result<Self::Output, RemoteError> {
        self.client.inventory(key).await
    }

    fn resource_name(&self) -> &'static str {
        "inventory"
    }
}

pub struct ForecastFetcher {
    client: ProviderClient,
}

impl ForecastFetcher {
    pub fn new(client: ProviderClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResourceFetcher for ForecastFetcher {
    type Key = ForecastRequest;
    type Output = ForecastSeries;

    async fn fetch(&self, key: &ForecastRequest) -> Result<Self::Output, RemoteError> {
        self.client.forecast(&key.product_id, key.days).await
    }

    fn resource_name(&self) -> &'static str {
        "forecast"
    }
}

pub struct BatchMarkdownFetcher {
    client: ProviderClient,
}

impl BatchMarkdownFetcher {
    pub fn new(client: ProviderClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResourceFetcher for BatchMarkdownFetcher {
    type Key = Vec<ProductId>;
    type Output = Vec<MarkdownSuggestion>;

    async fn fetch(&self, key: &Vec<ProductId>) -> Result<Self::Output, RemoteError> {
        self.client.batch_markdown(key).await
    }

    fn resource_name(&self) -> &'static str {
        "markdown_batch"
    }
}

pub struct AnalyticsFetcher {
    client: ProviderClient,
}

impl AnalyticsFetcher {
    pub fn new(client: ProviderClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResourceFetcher for AnalyticsFetcher {
    type Key = ();
    type Output = AnalyticsSummary;

    async fn fetch(&self, _key: &()) -> Result<Self::Output, RemoteError> {
        self.client.analytics_summary().await
    }

    fn resource_name(&self) -> &'static str {
        "analytics"
    }
}

pub struct HealthFetcher {
    client: ProviderClient,
}

impl HealthFetcher {
    pub fn new(client: ProviderClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResourceFetcher for HealthFetcher {
    type Key = ();
    type Output = ServiceHealth;

    async fn fetch(&self, _key: &()) -> Result<Self::Output, RemoteError> {
        self.client.health().await
    }

    fn resource_name(&self) -> &'static str {
        "health"
    }
}

pub struct SalesHistoryFetcher {
    client: ProviderClient,
}

impl SalesHistoryFetcher {
    pub fn new(client: ProviderClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResourceFetcher for SalesHistoryFetcher {
    type Key = SalesHistoryRequest;
    type Output = SalesHistory;

    async fn fetch(&self, key: &SalesHistoryRequest) -> Result<Self::Output, RemoteError> {
        self.client.sales_history(&key.product_id, key.days).await
    }

    fn resource_name(&self) -> &'static str {
        "sales_history"
    }
}
