//! Demand forecast wire model.
//!
//! A forecast is ephemeral: every fetch replaces the previous series
//! wholesale, nothing is merged across fetches.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::ProductId;

/// One forecast step: predicted demand with its confidence band.
///
/// Provider invariant: `confidence_lower <= predicted <= confidence_upper`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub predicted: f64,
    pub confidence_lower: f64,
    pub confidence_upper: f64,
}

/// Chart-ready point mixing history (`actual`) and forecast (`predicted`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub actual: Option<f64>,
    pub predicted: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_lower: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_upper: Option<f64>,
}

/// Backtest accuracy of the provider's forecasting model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyMetrics {
    /// Mean absolute error, in units.
    pub mae: f64,
    /// Mean absolute percentage error.
    pub mape: f64,
    /// Accuracy percentage (100 - mape, clamped by the provider).
    pub accuracy: f64,
}

/// Full payload of `GET /forecast/{product_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    pub product_id: ProductId,
    pub forecast: Vec<ForecastPoint>,
    #[serde(default)]
    pub chart_data: Vec<ChartPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy_metrics: Option<AccuracyMetrics>,
    pub forecast_horizon_days: u32,
}
