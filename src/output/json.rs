//! JSON rendering of the aggregate tables.

use crate::engine::{RankedEntry, TableSet};

/// The whole table set, diagnostics included.
pub fn render_tables_json(tables: &TableSet) -> String {
    serde_json::to_string_pretty(tables).unwrap()
}

/// The revenue-metric tables only.
pub fn render_revenue_json(tables: &TableSet) -> String {
    serde_json::to_string_pretty(&serde_json::json!({
        "revenue_by_state": tables.revenue_by_state,
        "revenue_by_month": tables.revenue_by_month,
        "revenue_by_category": tables.revenue_by_category,
        "diagnostics": tables.diagnostics,
    }))
    .unwrap()
}

/// The sales-count tables only.
pub fn render_volume_json(tables: &TableSet) -> String {
    serde_json::to_string_pretty(&serde_json::json!({
        "sales_count_by_state": tables.sales_count_by_state,
        "sales_count_by_month": tables.sales_count_by_month,
        "sales_count_by_category": tables.sales_count_by_category,
        "diagnostics": tables.diagnostics,
    }))
    .unwrap()
}

/// Seller rankings for both metrics.
pub fn render_sellers_json(by_revenue: &[RankedEntry], by_count: &[RankedEntry]) -> String {
    serde_json::to_string_pretty(&serde_json::json!({
        "top_sellers_by_revenue": by_revenue,
        "top_sellers_by_count": by_count,
    }))
    .unwrap()
}
