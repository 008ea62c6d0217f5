//! Validation failure reporting.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use hyg_transform::BatchFailure;

pub fn print_failures(failures: &[BatchFailure]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Position"),
        header_cell("Field"),
        header_cell("Value"),
        header_cell("Message"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for failure in failures {
        table.add_row(vec![
            Cell::new(failure.position),
            Cell::new(failure.error.field.as_str())
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
            value_cell(&failure.error.value),
            Cell::new(&failure.error.message),
        ]);
    }
    println!();
    println!("Validation failures:");
    println!("{table}");
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: &str) -> Cell {
    if value.trim().is_empty() {
        Cell::new("-").fg(Color::DarkGrey)
    } else {
        Cell::new(value)
    }
}
