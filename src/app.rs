//! Command dispatch: load records, run the engine, render the view.

use salestats::data::{LoadSummary, RecordFilter, load_records};
use salestats::engine::{Metric, TableSet, run_all, top_n};
use salestats::error::AppError;
use salestats::output::{
    print_diagnostics, print_dimension_table, print_headline, print_month_table,
    print_ranked_table, print_state_table, render_revenue_json, render_sellers_json,
    render_tables_json, render_volume_json,
};

use crate::cli::{Cli, Commands};

pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let input = cli.input.as_deref().ok_or(AppError::MissingInput)?;
    let top = cli.top_n()?;
    let filter = RecordFilter::new(cli.year, cli.sellers.clone());

    let summary = load_records(input, &filter)?;
    let tables = run_all(&summary.records)?;

    let command = Commands::or_default(cli.command);
    if cli.json {
        let json = match command {
            Commands::Summary => render_tables_json(&tables),
            Commands::Revenue => render_revenue_json(&tables),
            Commands::Volume => render_volume_json(&tables),
            Commands::Sellers => render_sellers_json(
                &top_n(&tables.seller_stats, Metric::Sum, top),
                &top_n(&tables.seller_stats, Metric::Count, top),
            ),
        };
        println!("{json}");
        return Ok(());
    }

    if summary.records.is_empty() {
        println!("No transaction records match the current filters.");
        return Ok(());
    }

    let use_color = cli.use_color();
    print_header_metrics(&summary, use_color);

    match command {
        Commands::Summary => print_summary(&tables, use_color),
        Commands::Revenue => print_revenue(&tables, top, use_color),
        Commands::Volume => print_volume(&tables, top, use_color),
        Commands::Sellers => print_sellers(&tables, top, use_color),
    }

    print_diagnostics(&tables.diagnostics);
    Ok(())
}

fn print_header_metrics(summary: &LoadSummary, use_color: bool) {
    let total_revenue: f64 = summary.records.iter().map(|r| r.price).sum();
    print_headline(total_revenue, summary.records.len(), use_color);
    if summary.filtered_out > 0 {
        println!(
            "  {} of {} records match the active filters",
            summary.records.len(),
            summary.total
        );
    }
}

fn print_summary(tables: &TableSet, use_color: bool) {
    print_state_table("Revenue by state", &tables.revenue_by_state, Metric::Sum, use_color);
    print_month_table("Monthly revenue", &tables.revenue_by_month, Metric::Sum, use_color);
    print_dimension_table(
        "Revenue by category",
        "Category",
        &tables.revenue_by_category,
        use_color,
    );
    print_state_table(
        "Sales by state",
        &tables.sales_count_by_state,
        Metric::Count,
        use_color,
    );
    print_month_table("Monthly sales", &tables.sales_count_by_month, Metric::Count, use_color);
    print_dimension_table(
        "Sales by category",
        "Category",
        &tables.sales_count_by_category,
        use_color,
    );
    print_dimension_table("Sellers", "Seller", &tables.seller_stats, use_color);
}

fn print_revenue(tables: &TableSet, top: usize, use_color: bool) {
    print_state_table("Revenue by state", &tables.revenue_by_state, Metric::Sum, use_color);
    print_month_table("Monthly revenue", &tables.revenue_by_month, Metric::Sum, use_color);
    print_dimension_table(
        "Revenue by category",
        "Category",
        &tables.revenue_by_category,
        use_color,
    );
    print_ranked_table(
        &format!("Top {top} states (revenue)"),
        "State",
        &top_n(&tables.revenue_by_state, Metric::Sum, top),
        Metric::Sum,
        use_color,
    );
}

fn print_volume(tables: &TableSet, top: usize, use_color: bool) {
    print_state_table(
        "Sales by state",
        &tables.sales_count_by_state,
        Metric::Count,
        use_color,
    );
    print_month_table("Monthly sales", &tables.sales_count_by_month, Metric::Count, use_color);
    print_dimension_table(
        "Sales by category",
        "Category",
        &tables.sales_count_by_category,
        use_color,
    );
    print_ranked_table(
        &format!("Top {top} states (sales)"),
        "State",
        &top_n(&tables.sales_count_by_state, Metric::Count, top),
        Metric::Count,
        use_color,
    );
}

fn print_sellers(tables: &TableSet, top: usize, use_color: bool) {
    print_ranked_table(
        &format!("Top {top} sellers (revenue)"),
        "Seller",
        &top_n(&tables.seller_stats, Metric::Sum, top),
        Metric::Sum,
        use_color,
    );
    print_ranked_table(
        &format!("Top {top} sellers (sales)"),
        "Seller",
        &top_n(&tables.seller_stats, Metric::Count, top),
        Metric::Count,
        use_color,
    );
}
