//! Markdown suggestion wire model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ids::ProductId;

/// AI-suggested markdown for one product, as served by the markdown
/// endpoints.
///
/// Collections of suggestions are keyed by `product_id`: any held collection
/// contains at most one entry per product, and a refetch of a single product
/// replaces its entry rather than duplicating it (see
/// [`MarkdownBoard`](crate::sync::MarkdownBoard)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkdownSuggestion {
    pub product_id: ProductId,
    /// Suggested discount in percent, 0-100.
    pub optimal_discount: Decimal,
    pub projected_units_sold: Decimal,
    pub estimated_waste_reduction: Decimal,
    pub revenue_impact: Decimal,
    /// Model confidence, 0.0-1.0.
    pub confidence_score: f64,
    pub discounted_price: Decimal,
    pub potential_savings: Decimal,
}
