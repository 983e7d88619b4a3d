//! Client-side inventory filtering and status counts.
//!
//! Pure and deterministic: the same collection and filter set always produce
//! the same subset, and filtering an already-filtered subset by the same
//! predicates is a no-op.

use super::inventory::{InventoryItem, StockStatus};

/// Predicate set applied to a fetched inventory snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryFilter {
    /// Exact status match.
    pub status: Option<StockStatus>,
    /// Exact category match.
    pub category: Option<String>,
    /// Case-insensitive, unanchored substring match on the product name.
    pub search: Option<String>,
}

impl InventoryFilter {
    pub fn matches(&self, item: &InventoryItem) -> bool {
        if let Some(status) = self.status {
            if item.status != status {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &item.category != category {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !item.product_name.to_lowercase().contains(&needle) {
                return false;
            }
        }
        true
    }
}

/// Derived counts over a (possibly filtered) inventory collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub expiring: usize,
    pub overstock: usize,
    pub safe: usize,
}

/// Apply the filter, preserving input order.
pub fn filter_items<'a>(
    items: &'a [InventoryItem],
    filter: &InventoryFilter,
) -> Vec<&'a InventoryItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// Count statuses across a collection.
pub fn count_statuses<'a, I>(items: I) -> StatusCounts
where
    I: IntoIterator<Item = &'a InventoryItem>,
{
    let mut counts = StatusCounts::default();
    for item in items {
        counts.total += 1;
        match item.status {
            StockStatus::Expiring => counts.expiring += 1,
            StockStatus::Overstock => counts.overstock += 1,
            StockStatus::Safe => counts.safe += 1,
            StockStatus::Expired => {}
        }
    }
    counts
}
