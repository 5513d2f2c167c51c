use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

/// Scale a value through thousand/million steps, optionally with a
/// currency prefix: `format_scaled(1234.5, "R$")` is `"R$ 1.23K"`.
pub fn format_scaled(value: f64, prefix: &str) -> String {
    let magnitude = scaled(value);
    if prefix.is_empty() {
        magnitude
    } else {
        format!("{prefix} {magnitude}")
    }
}

fn scaled(value: f64) -> String {
    let (sign, v) = if value < 0.0 { ("-", -value) } else { ("", value) };
    if v < 1_000.0 {
        format!("{sign}{v:.2}")
    } else if v < 1_000_000.0 {
        format!("{sign}{:.2}K", v / 1_000.0)
    } else {
        format!("{sign}{:.2}M", v / 1_000_000.0)
    }
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

pub(super) fn right_cell(text: &str) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}
