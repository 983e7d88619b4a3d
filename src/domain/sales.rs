//! Historical sales wire model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ids::ProductId;

/// One day of recorded sales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub units_sold: Decimal,
    pub price: Decimal,
}

/// Full payload of `GET /products/{product_id}/sales-history`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesHistory {
    pub product_id: ProductId,
    pub sales_history: Vec<SalesRecord>,
    pub total_units: Decimal,
    pub average_daily_sales: Decimal,
    pub days_covered: u32,
}
