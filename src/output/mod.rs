mod format;
mod json;
mod table;

pub use format::format_scaled;
pub use json::{render_revenue_json, render_sellers_json, render_tables_json, render_volume_json};
pub use table::{
    print_diagnostics, print_dimension_table, print_headline, print_month_table,
    print_ranked_table, print_state_table,
};
