//! Encoding pipeline: field quoting, record writing, and JSON export

#[cfg(feature = "json")]
pub mod json;
pub mod primitives;
pub mod writer;

use crate::table::Table;

/// Render `table` as CSV, one record per row.
pub fn encode_table(table: &Table) -> String {
    let mut w = writer::RecordWriter::new(table.delimiter());
    for row in table.rows() {
        w.record(row.iter());
    }
    w.into_string()
}

/// Per-column maximum rendered width across all rows.
pub fn column_widths(table: &Table) -> Vec<usize> {
    let delimiter = table.delimiter();
    let mut widths = vec![0usize; table.column_count()];
    for row in table.rows() {
        if widths.len() < row.len() {
            widths.resize(row.len(), 0);
        }
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(primitives::rendered_width(cell, delimiter));
        }
    }
    widths
}

/// Render `table` with every field right-padded to its column's widest rendered value.
pub fn encode_table_aligned(table: &Table) -> String {
    let widths = column_widths(table);
    let mut w = writer::RecordWriter::new(table.delimiter());
    for row in table.rows() {
        w.record_aligned(row.iter(), &widths);
    }
    w.into_string()
}
