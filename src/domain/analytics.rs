//! Catalog-wide analytics snapshot wire model.
//!
//! A summary is a point-in-time aggregate with no links back to individual
//! inventory items.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline counts and value across the whole catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryOverview {
    pub total_items: u32,
    pub total_value: Decimal,
    pub expiring_items: u32,
    pub overstock_items: u32,
    pub safe_items: u32,
}

/// Waste exposure and what markdown could recover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WastePrevention {
    pub potential_waste_value: Decimal,
    pub markdown_candidates: u32,
    pub estimated_savings_opportunity: Decimal,
}

/// Per-category slice of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub count: u32,
    pub value: Decimal,
    pub expiring: u32,
}

/// Full payload of `GET /analytics/summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub inventory_overview: InventoryOverview,
    pub waste_prevention: WastePrevention,
    /// Keyed by category name. BTreeMap keeps report ordering stable.
    pub categories: BTreeMap<String, CategoryBreakdown>,
}
