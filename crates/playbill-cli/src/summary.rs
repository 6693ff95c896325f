use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use playbill_cli::types::BuildResult;
use playbill_model::format_timestamp;

pub fn print_summary(result: &BuildResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: dry run, nothing written"),
    }
    println!("Source: {}", result.source);
    println!("Generated: {}", format_timestamp(&result.generated_at));

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows read"),
        header_cell("Shows"),
        header_cell("Skipped"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(result.rows_read),
        Cell::new(result.emitted)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        count_cell(result.skipped(), Color::Yellow),
    ]);
    println!("{table}");
    print_skipped_table(result);
}

fn print_skipped_table(result: &BuildResult) {
    if result.diagnostics.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Row"), header_cell("Reason")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for diagnostic in &result.diagnostics {
        table.add_row(vec![
            Cell::new(diagnostic.row),
            Cell::new(diagnostic.reason).fg(Color::Yellow),
        ]);
    }
    println!();
    println!("Skipped rows:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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
