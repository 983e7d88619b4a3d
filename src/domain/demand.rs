//! Forecast aggregation and stock recommendations.

use serde::Deserialize;

use super::forecast::ForecastPoint;

/// Stock-vs-demand thresholds for the recommendation rule.
///
/// Tunable policy, not derived: the defaults flag stock more than 20% above
/// forecast demand as overstock and less than 80% of it as short.
#[derive(Debug, Clone, Deserialize)]
pub struct StockPolicy {
    #[serde(default = "default_overstock_ratio")]
    pub overstock_ratio: f64,

    #[serde(default = "default_restock_ratio")]
    pub restock_ratio: f64,
}

fn default_overstock_ratio() -> f64 {
    1.2
}

fn default_restock_ratio() -> f64 {
    0.8
}

impl Default for StockPolicy {
    fn default() -> Self {
        Self {
            overstock_ratio: default_overstock_ratio(),
            restock_ratio: default_restock_ratio(),
        }
    }
}

/// Summary statistics over one forecast series.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSummary {
    pub total_predicted_demand: f64,
    pub average_daily_demand: f64,
    /// Half the confidence band width at the first forecast step, 0 for an
    /// empty series.
    pub confidence_half_width: f64,
}

/// What to do with current stock relative to forecast demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockAction {
    /// Stock well above demand: consider a markdown.
    Markdown,
    /// Stock short of demand: restock.
    Restock,
    /// Stock roughly in line with demand.
    Hold,
}

impl StockAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockAction::Markdown => "consider markdown",
            StockAction::Restock => "restock",
            StockAction::Hold => "hold",
        }
    }
}

/// Reduce a forecast series to its summary statistics.
///
/// `horizon_days` is supplied by the caller, not inferred from the series;
/// the caller must ensure it matches the horizon the series was generated
/// for, otherwise the daily average is meaningless.
pub fn summarize(series: &[ForecastPoint], horizon_days: u32) -> ForecastSummary {
    let total_predicted_demand: f64 = series.iter().map(|p| p.predicted).sum();

    let average_daily_demand = if horizon_days == 0 {
        0.0
    } else {
        total_predicted_demand / f64::from(horizon_days)
    };

    let confidence_half_width = series
        .first()
        .map(|p| (p.confidence_upper - p.confidence_lower) / 2.0)
        .unwrap_or(0.0);

    ForecastSummary {
        total_predicted_demand,
        average_daily_demand,
        confidence_half_width,
    }
}

/// Threshold rule mapping stock against total forecast demand.
pub fn recommend(stock: u32, total_predicted_demand: f64, policy: &StockPolicy) -> StockAction {
    let stock = f64::from(stock);
    if stock > total_predicted_demand * policy.overstock_ratio {
        StockAction::Markdown
    } else if stock < total_predicted_demand * policy.restock_ratio {
        StockAction::Restock
    } else {
        StockAction::Hold
    }
}
