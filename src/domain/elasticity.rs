//! Markdown what-if impact model.
//!
//! Projects sales, revenue, and waste outcomes for an operator-chosen
//! discount without another provider round trip. This is a heuristic
//! approximation of price elasticity, not a calibrated demand model: sales
//! respond superlinearly to deeper-than-suggested discounts, saturating at a
//! hard ceiling relative to the AI projection.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::inventory::InventoryItem;
use super::markdown::MarkdownSuggestion;

/// Tunable shape of the elasticity heuristic.
#[derive(Debug, Clone, Deserialize)]
pub struct ElasticityPolicy {
    /// Sales response multiplier applied to the discount ratio.
    #[serde(default = "default_response_factor")]
    pub response_factor: Decimal,

    /// Ceiling on projected sales as a multiple of the AI projection.
    #[serde(default = "default_sales_cap")]
    pub sales_cap: Decimal,
}

fn default_response_factor() -> Decimal {
    Decimal::new(12, 1) // 1.2
}

fn default_sales_cap() -> Decimal {
    Decimal::from(2)
}

impl Default for ElasticityPolicy {
    fn default() -> Self {
        Self {
            response_factor: default_response_factor(),
            sales_cap: default_sales_cap(),
        }
    }
}

/// Projected outcome of applying a chosen discount.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownImpact {
    pub discounted_price: Decimal,
    pub projected_units_sold: Decimal,
    pub potential_revenue: Decimal,
    /// Units diverted from waste; equals units sold via the markdown.
    pub waste_reduction_units: Decimal,
}

/// Project the impact of selling `item` at `chosen_discount` percent off.
///
/// `suggestion.optimal_discount` is the AI baseline the ratio is measured
/// against. A zero baseline (provider suggested no markdown) is treated as
/// the chosen discount already being at baseline, i.e. ratio 1.0.
///
/// Projected units never exceed on-hand stock.
pub fn project_impact(
    item: &InventoryItem,
    suggestion: &MarkdownSuggestion,
    chosen_discount: Decimal,
    policy: &ElasticityPolicy,
) -> MarkdownImpact {
    let hundred = Decimal::ONE_HUNDRED;
    let discounted_price = item.current_price * (Decimal::ONE - chosen_discount / hundred);

    let discount_ratio = if suggestion.optimal_discount.is_zero() {
        Decimal::ONE
    } else {
        chosen_discount / suggestion.optimal_discount
    };

    let response = (discount_ratio * policy.response_factor).min(policy.sales_cap);
    let adjusted_sales = suggestion.projected_units_sold * response;

    let stock = Decimal::from(item.stock);
    let projected_units_sold = adjusted_sales.min(stock);

    MarkdownImpact {
        discounted_price,
        projected_units_sold,
        potential_revenue: projected_units_sold * discounted_price,
        waste_reduction_units: projected_units_sold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ProductId, StockStatus};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn item(stock: u32, price: Decimal) -> InventoryItem {
        InventoryItem {
            product_id: ProductId::new("P001"),
            product_name: "Greek Yogurt 500g".into(),
            category: "Dairy".into(),
            stock,
            expiry_date: NaiveDate::from_ymd_opt(2025, 6, 24).unwrap(),
            current_price: price,
            days_until_expiry: 4,
            status: StockStatus::Expiring,
        }
    }

    fn suggestion(optimal: Decimal, projected: Decimal) -> MarkdownSuggestion {
        MarkdownSuggestion {
            product_id: ProductId::new("P001"),
            optimal_discount: optimal,
            projected_units_sold: projected,
            estimated_waste_reduction: projected,
            revenue_impact: dec!(-10),
            confidence_score: 0.8,
            discounted_price: dec!(0),
            potential_savings: dec!(0),
        }
    }

    #[test]
    fn baseline_discount_scales_sales_by_response_factor() {
        let impact = project_impact(
            &item(100, dec!(10.00)),
            &suggestion(dec!(20), dec!(50)),
            dec!(20),
            &ElasticityPolicy::default(),
        );

        assert_eq!(impact.discounted_price, dec!(8.00));
        assert_eq!(impact.projected_units_sold, dec!(60));
        assert_eq!(impact.potential_revenue, dec!(480.00));
        assert_eq!(impact.waste_reduction_units, dec!(60));
    }

    #[test]
    fn deep_discount_saturates_at_sales_cap() {
        // Ratio 3.0 would triple sales; the cap holds it at 2x.
        let impact = project_impact(
            &item(500, dec!(10.00)),
            &suggestion(dec!(20), dec!(50)),
            dec!(60),
            &ElasticityPolicy::default(),
        );

        assert_eq!(impact.projected_units_sold, dec!(100));
    }

    #[test]
    fn shallow_discount_scales_sublinearly() {
        // Ratio 0.5 * 1.2 = 0.6 of the AI projection.
        let impact = project_impact(
            &item(100, dec!(10.00)),
            &suggestion(dec!(20), dec!(50)),
            dec!(10),
            &ElasticityPolicy::default(),
        );

        assert_eq!(impact.projected_units_sold, dec!(30));
        assert_eq!(impact.discounted_price, dec!(9.00));
    }

    #[test]
    fn projected_units_never_exceed_stock() {
        for chosen in [dec!(0), dec!(10), dec!(25), dec!(50), dec!(70), dec!(100)] {
            let impact = project_impact(
                &item(40, dec!(3.50)),
                &suggestion(dec!(15), dec!(80)),
                chosen,
                &ElasticityPolicy::default(),
            );
            assert!(
                impact.projected_units_sold <= dec!(40),
                "discount {chosen} projected above stock"
            );
        }
    }

    #[test]
    fn zero_baseline_falls_back_to_unit_ratio() {
        let impact = project_impact(
            &item(100, dec!(10.00)),
            &suggestion(dec!(0), dec!(50)),
            dec!(30),
            &ElasticityPolicy::default(),
        );

        // Ratio treated as 1.0: 50 * 1.2 = 60.
        assert_eq!(impact.projected_units_sold, dec!(60));
    }
}
