//! Inventory catalog wire model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ids::ProductId;

/// Stock-health classification assigned by the provider.
///
/// The provider derives this from stock, shelf life, and predicted demand;
/// the client never recomputes it, only filters and counts on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Safe,
    Overstock,
    Expiring,
    Expired,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Safe => "safe",
            StockStatus::Overstock => "overstock",
            StockStatus::Expiring => "expiring",
            StockStatus::Expired => "expired",
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One catalog entry as served by `GET /inventory`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub category: String,
    pub stock: u32,
    pub expiry_date: NaiveDate,
    pub current_price: Decimal,
    /// Negative once the item is past its expiry date.
    pub days_until_expiry: i32,
    pub status: StockStatus,
}

impl InventoryItem {
    /// Whether this item falls inside the markdown candidate window.
    pub fn expires_within(&self, days: i32) -> bool {
        self.days_until_expiry <= days
    }
}
