//! Markdown suggestion board: batch orchestration plus single-item merge.

use tracing::{debug, warn};

use super::orchestrator::FetchOrchestrator;
use super::resources::BatchMarkdownFetcher;
use super::state::RequestState;
use crate::api::ProviderClient;
use crate::domain::{MarkdownSuggestion, ProductId};
use crate::error::RemoteError;

/// Holds the current set of markdown suggestions.
///
/// Batch fetches replace the whole collection; refetching one product merges
/// its fresh suggestion in, replacing any previous entry for that product and
/// leaving the rest untouched. The collection therefore never holds two
/// suggestions for the same product.
pub struct MarkdownBoard {
    orchestrator: FetchOrchestrator<BatchMarkdownFetcher>,
    client: ProviderClient,
}

impl MarkdownBoard {
    pub fn new(client: ProviderClient) -> Self {
        Self {
            orchestrator: FetchOrchestrator::new(BatchMarkdownFetcher::new(client.clone())),
            client,
        }
    }

    pub fn snapshot(&self) -> RequestState<Vec<MarkdownSuggestion>> {
        self.orchestrator.snapshot()
    }

    /// Current suggestions, empty before the first successful fetch.
    pub fn suggestions(&self) -> Vec<MarkdownSuggestion> {
        self.orchestrator.data().unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.orchestrator.is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.orchestrator.error()
    }

    /// Point the board at a product set, re-fetching if it changed.
    ///
    /// An empty set is a no-op, not an error: nothing is fetched and held
    /// data is left as it is.
    pub async fn set_products(&self, product_ids: Vec<ProductId>) {
        if product_ids.is_empty() {
            debug!("No markdown candidates; skipping batch fetch");
            return;
        }
        self.orchestrator.set_input(product_ids).await;
    }

    /// Re-fetch the current product set.
    pub async fn refresh(&self) {
        self.orchestrator.refresh().await;
    }

    /// Fetch one product's suggestion and merge it into the board.
    ///
    /// On success the fresh suggestion replaces any held entry for the same
    /// product. On failure the board's error is set, held suggestions are
    /// kept, and the error is returned to the caller for immediate handling.
    pub async fn fetch_single(
        &self,
        product_id: &ProductId,
    ) -> Result<MarkdownSuggestion, RemoteError> {
        match self.client.markdown_suggestion(product_id).await {
            Ok(suggestion) => {
                self.orchestrator.apply(|state| {
                    let held = state.data.get_or_insert_with(Vec::new);
                    held.retain(|s| s.product_id != suggestion.product_id);
                    held.push(suggestion.clone());
                });
                Ok(suggestion)
            }
            Err(err) => {
                warn!(product = %product_id, error = %err, "Single markdown fetch failed");
                self.orchestrator.apply(|state| {
                    state.error = Some(err.to_string());
                });
                Err(err)
            }
        }
    }

    /// Commit a suggestion upstream and merge the provider's echo.
    pub async fn save(&self, product_id: &ProductId) -> Result<MarkdownSuggestion, RemoteError> {
        let saved = self.client.save_markdown(product_id).await?;
        self.orchestrator.apply(|state| {
            let held = state.data.get_or_insert_with(Vec::new);
            held.retain(|s| s.product_id != saved.product_id);
            held.push(saved.clone());
        });
        Ok(saved)
    }
}
