use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::types::ExportSummary;

pub fn print_summary(summary: &ExportSummary) {
    println!("Output: {}", summary.output_dir.display());
    let mut table = Table::new();
    table.set_header(vec!["File", "Rows", "Bytes", "Elapsed"]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(&summary.filename),
        Cell::new(summary.rows),
        Cell::new(summary.bytes_written),
        Cell::new(format!("{} ms", summary.elapsed_ms)),
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
