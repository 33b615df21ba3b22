use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sales_cli::pipeline::TransformOutcome;

const CURRENCY: &str = "جنيه";

pub fn print_summary(outcome: &TransformOutcome) {
    let metadata = &outcome.document.metadata;
    let report = &outcome.report;
    println!("Input: {}", outcome.input.display());
    println!("Output: {}", outcome.written.path.display());

    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![Cell::new("Rows read"), Cell::new(report.input_rows)]);
    table.add_row(vec![
        Cell::new("Rows kept"),
        Cell::new(report.kept_rows).fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Rows dropped"),
        count_cell(report.dropped_rows(), Color::Yellow),
    ]);
    table.add_row(vec![
        dim_cell("  missing customer code"),
        count_cell(report.missing_customer_code, Color::Yellow),
    ]);
    table.add_row(vec![
        dim_cell("  missing product code"),
        count_cell(report.missing_product_code, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Unparsed dates"),
        count_cell(report.unparsed_dates, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Defaulted numbers"),
        count_cell(report.defaulted_numbers, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Unique customers"),
        Cell::new(metadata.unique_customers),
    ]);
    table.add_row(vec![
        Cell::new("Unique products"),
        Cell::new(metadata.unique_products),
    ]);
    table.add_row(vec![
        Cell::new("Unique invoices"),
        Cell::new(metadata.unique_invoices),
    ]);
    table.add_row(vec![
        Cell::new("Total sales")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} {CURRENCY}", format_amount(metadata.total_sales)))
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Output size"),
        Cell::new(format!("{:.2} KB", outcome.written.bytes as f64 / 1024.0)),
    ]);
    table.add_row(vec![
        Cell::new("Elapsed"),
        dim_cell(format!("{} ms", outcome.duration.as_millis())),
    ]);
    println!("{table}");
}

/// Two decimals with comma thousands separators, e.g. `1,234,567.50`.
fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_are_grouped_by_thousands() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.5), "999.50");
        assert_eq!(format_amount(1000.0), "1,000.00");
        assert_eq!(format_amount(1_234_567.5), "1,234,567.50");
    }

    #[test]
    fn negative_amounts_keep_their_sign() {
        assert_eq!(format_amount(-12_345.678), "-12,345.68");
        assert_eq!(format_amount(-0.001), "0.00");
    }
}
