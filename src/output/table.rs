//! Terminal table rendering for the aggregate tables.

use comfy_table::Cell;

use crate::engine::{Diagnostics, DimensionAggregate, GeoAggregate, Metric, MonthAggregate, RankedEntry};
use crate::output::format::{create_styled_table, format_scaled, header_cell, right_cell};

/// Currency prefix of the upstream feed.
const CURRENCY: &str = "R$";

/// Print the two headline metrics the dashboard leads with.
pub fn print_headline(total_revenue: f64, total_sales: usize, use_color: bool) {
    let revenue = format_scaled(total_revenue, CURRENCY);
    let sales = format_scaled(total_sales as f64, "");
    if use_color {
        println!("\n  Revenue: \x1b[1m{revenue}\x1b[0m | Sales: \x1b[1m{sales}\x1b[0m");
    } else {
        println!("\n  Revenue: {revenue} | Sales: {sales}");
    }
}

/// Print per-record exclusion counts. Silent only when nothing was excluded.
pub fn print_diagnostics(diagnostics: &Diagnostics) {
    if diagnostics.is_clean() {
        return;
    }
    println!(
        "\n  Excluded per table: {} invalid dates, {} missing state, {} missing category, {} missing seller",
        diagnostics.invalid_dates,
        diagnostics.missing_state,
        diagnostics.missing_category,
        diagnostics.missing_seller,
    );
}

fn metric_header(metric: Metric) -> &'static str {
    match metric {
        Metric::Sum => "Revenue",
        Metric::Count => "Sales",
    }
}

fn metric_cell(sum: f64, count: i64, metric: Metric) -> String {
    match metric {
        Metric::Sum => format_scaled(sum, CURRENCY),
        Metric::Count => count.to_string(),
    }
}

/// State table with coordinates; a state with no known coordinates
/// renders as "unknown" rather than a fabricated pair.
pub fn print_state_table(title: &str, rows: &[GeoAggregate], metric: Metric, use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("State", use_color),
        header_cell(metric_header(metric), use_color),
        header_cell("Coordinates", use_color),
    ]);
    for row in rows {
        let coords = match row.coordinates {
            Some(c) => format!("{:.2}, {:.2}", c.lat, c.lon),
            None => "unknown".to_string(),
        };
        table.add_row(vec![
            Cell::new(&row.key),
            right_cell(&metric_cell(row.sum, row.count, metric)),
            right_cell(&coords),
        ]);
    }
    println!("\n{title}");
    println!("{table}");
}

pub fn print_month_table(title: &str, rows: &[MonthAggregate], metric: Metric, use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Year", use_color),
        header_cell("Month", use_color),
        header_cell(metric_header(metric), use_color),
    ]);
    for row in rows {
        table.add_row(vec![
            Cell::new(row.year),
            Cell::new(&row.label),
            right_cell(&metric_cell(row.sum, row.count, metric)),
        ]);
    }
    println!("\n{title}");
    println!("{table}");
}

pub fn print_dimension_table(
    title: &str,
    label: &str,
    rows: &[DimensionAggregate],
    use_color: bool,
) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell(label, use_color),
        header_cell("Revenue", use_color),
        header_cell("Sales", use_color),
    ]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.key),
            right_cell(&format_scaled(row.sum, CURRENCY)),
            right_cell(&row.count.to_string()),
        ]);
    }
    println!("\n{title}");
    println!("{table}");
}

/// Ranked (top-N) table; the value column follows the ranking metric.
pub fn print_ranked_table(
    title: &str,
    label: &str,
    entries: &[RankedEntry],
    metric: Metric,
    use_color: bool,
) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("#", use_color),
        header_cell(label, use_color),
        header_cell(metric_header(metric), use_color),
    ]);
    for (position, entry) in entries.iter().enumerate() {
        let value = match metric {
            Metric::Sum => format_scaled(entry.value, CURRENCY),
            Metric::Count => format!("{:.0}", entry.value),
        };
        table.add_row(vec![
            right_cell(&(position + 1).to_string()),
            Cell::new(&entry.key),
            right_cell(&value),
        ]);
    }
    println!("\n{title}");
    println!("{table}");
}
