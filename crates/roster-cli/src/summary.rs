//! Run summary printed after a successful pipeline pass.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_cli::pipeline::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Output: {}", result.output.display());
    println!(
        "Rows: {} read, {} kept (header at row {})",
        result.input_rows,
        result.kept_rows,
        result.header_offset + 1
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![header_cell("Sheet"), header_cell("Rows")]);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for sheet in &result.sheets {
        table.add_row(vec![Cell::new(&sheet.name), Cell::new(sheet.rows)]);
    }
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
