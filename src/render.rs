//! Grid rendering of result tables
//!
//! Turns a [`Table`] into an ASCII grid for the terminal. Columns holding
//! only numbers are right-aligned.

use comfy_table::presets::ASCII_FULL;
use comfy_table::{CellAlignment, Table as Grid};

use crate::table::Table;
use crate::value::Cell;

/// Whether every present data cell in the column is numeric (no-value cells
/// aside) and at least one of them is
fn is_numeric_column(table: &Table, col_idx: usize) -> bool {
    let mut has_number = false;
    for cell in table.rows().iter().filter_map(|row| row.get(col_idx)) {
        match cell {
            Cell::Integer(_) | Cell::Float(_) => has_number = true,
            Cell::Null => {}
            Cell::Text(_) => return false,
        }
    }
    has_number
}

/// Render the table as a grid, header first
pub fn render_table(table: &Table) -> String {
    let mut grid = Grid::new();
    grid.load_preset(ASCII_FULL);
    grid.set_header(table.columns().to_vec());

    for row in table.rows() {
        grid.add_row(row.iter().map(|cell| cell.to_string()).collect::<Vec<_>>());
    }

    for col_idx in 0..table.column_count() {
        if is_numeric_column(table, col_idx) {
            if let Some(column) = grid.column_mut(col_idx) {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }
    }

    grid.to_string()
}
