//! Provider-agnostic domain model and derived analytics.

mod analytics;
mod demand;
mod elasticity;
mod filter;
mod forecast;
mod ids;
mod inventory;
mod markdown;
mod plan;
mod sales;

// Core domain types
pub use ids::ProductId;
pub use inventory::{InventoryItem, StockStatus};
pub use markdown::MarkdownSuggestion;

// Forecast model
pub use forecast::{AccuracyMetrics, ChartPoint, ForecastPoint, ForecastSeries};

// Analytics snapshot
pub use analytics::{AnalyticsSummary, CategoryBreakdown, InventoryOverview, WastePrevention};

// Sales history
pub use sales::{SalesHistory, SalesRecord};

// Derived computations
pub use demand::{recommend, summarize, ForecastSummary, StockAction, StockPolicy};
pub use elasticity::{project_impact, ElasticityPolicy, MarkdownImpact};
pub use filter::{count_statuses, filter_items, InventoryFilter, StatusCounts};
pub use plan::{build_plan, MarkdownPlan, PlanRow, PlanTotals};
