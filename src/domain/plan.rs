//! Markdown plan derivation.
//!
//! Joins an inventory snapshot with a batch of markdown suggestions into a
//! reviewable plan: one row per candidate product with its projected impact
//! at the suggested discount, plus catalog-level totals. Derived on demand,
//! never stored.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::elasticity::{project_impact, ElasticityPolicy, MarkdownImpact};
use super::ids::ProductId;
use super::inventory::InventoryItem;
use super::markdown::MarkdownSuggestion;

/// One markdown candidate with its projected outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRow {
    pub product_id: ProductId,
    pub product_name: String,
    pub expiry_date: NaiveDate,
    pub stock: u32,
    pub current_price: Decimal,
    pub suggested_discount: Decimal,
    pub confidence_score: f64,
    pub impact: MarkdownImpact,
    /// Waste value recovered at full price, the operator-facing savings
    /// figure.
    pub estimated_savings: Decimal,
}

/// Catalog-level aggregates over the plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanTotals {
    pub eligible: usize,
    pub total_potential_savings: Decimal,
    pub average_discount: Decimal,
    pub average_confidence: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownPlan {
    pub rows: Vec<PlanRow>,
    pub totals: PlanTotals,
}

/// Build the plan for the given snapshot and suggestion batch.
///
/// Suggestions without a matching inventory item are skipped: the snapshot
/// and the batch come from separate fetches and may briefly disagree.
pub fn build_plan(
    items: &[InventoryItem],
    suggestions: &[MarkdownSuggestion],
    policy: &ElasticityPolicy,
) -> MarkdownPlan {
    let rows: Vec<PlanRow> = suggestions
        .iter()
        .filter_map(|suggestion| {
            let item = items
                .iter()
                .find(|item| item.product_id == suggestion.product_id)?;
            let impact = project_impact(item, suggestion, suggestion.optimal_discount, policy);
            let estimated_savings = impact.waste_reduction_units * item.current_price;

            Some(PlanRow {
                product_id: item.product_id.clone(),
                product_name: item.product_name.clone(),
                expiry_date: item.expiry_date,
                stock: item.stock,
                current_price: item.current_price,
                suggested_discount: suggestion.optimal_discount,
                confidence_score: suggestion.confidence_score,
                impact,
                estimated_savings,
            })
        })
        .collect();

    let totals = totals_for(suggestions);

    MarkdownPlan { rows, totals }
}

fn totals_for(suggestions: &[MarkdownSuggestion]) -> PlanTotals {
    let eligible = suggestions.len();
    let total_potential_savings: Decimal =
        suggestions.iter().map(|s| s.potential_savings).sum();

    let (average_discount, average_confidence) = if eligible == 0 {
        (Decimal::ZERO, 0.0)
    } else {
        let discount_sum: Decimal = suggestions.iter().map(|s| s.optimal_discount).sum();
        let confidence_sum: f64 = suggestions.iter().map(|s| s.confidence_score).sum();
        (
            discount_sum / Decimal::from(eligible as u64),
            confidence_sum / eligible as f64,
        )
    };

    PlanTotals {
        eligible,
        total_potential_savings,
        average_discount,
        average_confidence,
    }
}
