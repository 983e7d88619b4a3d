//! Builders for domain primitives used across tests.
//!
//! Concise factory functions so tests focus on assertions rather than
//! construction boilerplate.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::api::ServiceHealth;
use crate::domain::{
    ForecastPoint, ForecastSeries, InventoryItem, MarkdownSuggestion, ProductId, StockStatus,
};

/// Create a [`ProductId`] from a string.
pub fn product(id: &str) -> ProductId {
    ProductId::new(id)
}

/// Inventory item with a status derived from its expiry distance.
pub fn inventory_item(id: &str, stock: u32, days_until_expiry: i32) -> InventoryItem {
    let base = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
    let status = if days_until_expiry < 0 {
        StockStatus::Expired
    } else if days_until_expiry <= 5 {
        StockStatus::Expiring
    } else {
        StockStatus::Safe
    };

    InventoryItem {
        product_id: product(id),
        product_name: format!("Product {id}"),
        category: "Dairy".into(),
        stock,
        expiry_date: base + chrono::Days::new(days_until_expiry.max(0) as u64),
        current_price: dec!(2.50),
        days_until_expiry,
        status,
    }
}

/// Markdown suggestion with sensible defaults around the given discount.
pub fn suggestion(id: &str, optimal_discount: Decimal, projected_units: Decimal) -> MarkdownSuggestion {
    MarkdownSuggestion {
        product_id: product(id),
        optimal_discount,
        projected_units_sold: projected_units,
        estimated_waste_reduction: projected_units,
        revenue_impact: dec!(-12.50),
        confidence_score: 0.8,
        discounted_price: dec!(2.00),
        potential_savings: dec!(45.00),
    }
}

/// Forecast point on a fixed date.
pub fn forecast_point(predicted: f64, lower: f64, upper: f64) -> ForecastPoint {
    ForecastPoint {
        date: NaiveDate::from_ymd_opt(2025, 6, 21).unwrap(),
        predicted,
        confidence_lower: lower,
        confidence_upper: upper,
    }
}

/// Forecast series without chart data or accuracy metrics.
pub fn forecast_series(id: &str, points: Vec<ForecastPoint>, horizon: u32) -> ForecastSeries {
    ForecastSeries {
        product_id: product(id),
        forecast: points,
        chart_data: Vec::new(),
        accuracy_metrics: None,
        forecast_horizon_days: horizon,
    }
}

/// Healthy provider payload.
pub fn service_health() -> ServiceHealth {
    ServiceHealth {
        status: "healthy".into(),
        version: "1.0.0".into(),
    }
}
