//! Request and response types specific to the provider API.

use serde::{Deserialize, Serialize};

use crate::domain::ProductId;

/// Payload of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    pub version: String,
}

/// Query parameters for `GET /inventory`.
///
/// Doubles as the inventory orchestrator's input key; re-fetch decisions
/// compare these by value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryQuery {
    pub category: Option<String>,
    pub expiry_days: Option<u32>,
}

impl InventoryQuery {
    /// Render as a query string, empty when no filter is set.
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(category) = &self.category {
            params.push(format!("category={category}"));
        }
        if let Some(days) = self.expiry_days {
            params.push(format!("expiry_days={days}"));
        }

        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// Body of `POST /markdown/batch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchMarkdownRequest {
    pub product_ids: Vec<ProductId>,
}
