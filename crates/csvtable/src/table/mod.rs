//! Mutable table model: ordered rows of cells plus a nominal column count.
//!
//! Row 0 is treated as the header by [`Table::header`] and by sorting. The nominal column count is
//! tracked separately from the rows' physical lengths; column operations validate against it and
//! `insert_column`, `remove_column`, `resize_table` and [`RowMut::add`] keep it in step.

mod row;

use core::cmp::Ordering;
use core::fmt;

use tracing::{debug, trace};

pub use row::{Row, RowMut};

use crate::{Error, Result, decode::parser, encode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub(crate) rows: Vec<Row>,
    columns: usize,
    delimiter: char,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    /// An empty table using `,` as delimiter.
    pub fn new() -> Self {
        Self::with_delimiter(',')
    }

    pub fn with_delimiter(delimiter: char) -> Self {
        Self {
            rows: Vec::new(),
            columns: 0,
            delimiter,
        }
    }

    /// Parse `source` into a table. The nominal column count is the widest parsed row.
    ///
    /// Blank lines are dropped and malformed quoting is tolerated, so parsing never fails.
    pub fn parse(source: &str, delimiter: char) -> Self {
        let mut table = Self::with_delimiter(delimiter);
        for cells in parser::parse_source(source, delimiter) {
            table.columns = table.columns.max(cells.len());
            table.rows.push(Row::from_cells(cells));
        }
        debug!(
            rows = table.rows.len(),
            columns = table.columns,
            "parsed table"
        );
        table
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Change the delimiter used when rendering.
    pub fn set_delimiter(&mut self, delimiter: char) {
        self.delimiter = delimiter;
    }

    pub fn rows(&self) -> core::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    fn check_row_range(&self, index: usize) -> Result<()> {
        if index >= self.rows.len() {
            return Err(Error::RowOutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        Ok(())
    }

    fn check_column_range(&self, index: usize) -> Result<()> {
        if index >= self.columns {
            return Err(Error::ColumnOutOfRange {
                index,
                len: self.columns,
            });
        }
        Ok(())
    }

    pub fn header(&self) -> Result<&Row> {
        self.row(0)
    }

    pub fn header_mut(&mut self) -> Result<RowMut<'_>> {
        self.row_mut(0)
    }

    pub fn row(&self, index: usize) -> Result<&Row> {
        self.check_row_range(index)?;
        Ok(&self.rows[index])
    }

    pub fn row_mut(&mut self, index: usize) -> Result<RowMut<'_>> {
        self.check_row_range(index)?;
        Ok(RowMut::new(self, index))
    }

    /// Insert a row of `column_count()` absent cells at `index` (`0..=row_count()`).
    pub fn insert_row(&mut self, index: usize) -> Result<RowMut<'_>> {
        if index > self.rows.len() {
            return Err(Error::RowOutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        self.rows.insert(index, Row::with_len(self.columns));
        trace!(index, "inserted row");
        Ok(RowMut::new(self, index))
    }

    /// Append a row of `column_count()` absent cells.
    pub fn add_row(&mut self) -> RowMut<'_> {
        self.rows.push(Row::with_len(self.columns));
        let index = self.rows.len() - 1;
        RowMut::new(self, index)
    }

    /// Remove the row at `index` and hand it back.
    pub fn remove_row(&mut self, index: usize) -> Result<Row> {
        self.check_row_range(index)?;
        trace!(index, "removed row");
        Ok(self.rows.remove(index))
    }

    /// Set every cell of every row to absent.
    pub fn clear_rows(&mut self) {
        for row in &mut self.rows {
            row.clear();
        }
    }

    /// Swap two rows. Both indices are validated, even when equal.
    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_row_range(a)?;
        self.check_row_range(b)?;
        self.rows.swap(a, b);
        Ok(())
    }

    /// Remove column `index` from every row; the nominal count drops by one.
    pub fn remove_column(&mut self, index: usize) -> Result<()> {
        self.check_column_range(index)?;
        self.remove_column_unchecked(index);
        trace!(index, columns = self.columns, "removed column");
        Ok(())
    }

    fn remove_column_unchecked(&mut self, index: usize) {
        for row in &mut self.rows {
            row.remove(index);
        }
        self.resize_columns(self.columns - 1);
    }

    /// Insert an absent column before `index` in every row; the nominal count grows by one.
    ///
    /// `index` must name an existing column, so this cannot append past the last one.
    pub fn insert_column(&mut self, index: usize) -> Result<()> {
        self.check_column_range(index)?;
        for row in &mut self.rows {
            row.insert(index);
        }
        self.columns += 1;
        trace!(index, columns = self.columns, "inserted column");
        Ok(())
    }

    /// Swap two columns in every row.
    ///
    /// Equal indices return immediately without validation. Otherwise each row checks the indices
    /// against its own length, and all rows are checked before any is modified.
    pub fn swap_columns(&mut self, a: usize, b: usize) -> Result<()> {
        if a == b {
            return Ok(());
        }
        for row in &self.rows {
            row.check_swap(a, b)?;
        }
        for row in &mut self.rows {
            row.swap(a, b)?;
        }
        Ok(())
    }

    /// Set the nominal column count and truncate or absent-pad every row to it.
    pub fn resize_table(&mut self, columns: isize) -> Result<()> {
        let columns =
            usize::try_from(columns).map_err(|_| Error::InvalidColumnCount { count: columns })?;
        self.resize_columns(columns);
        Ok(())
    }

    pub(crate) fn resize_columns(&mut self, columns: usize) {
        self.columns = columns;
        for row in &mut self.rows {
            row.resize(columns);
        }
        trace!(columns, "resized table");
    }

    fn column_is_absent(&self, index: usize) -> bool {
        self.rows
            .iter()
            .all(|row| row.cell_or_absent(index).is_absent())
    }

    /// Remove leading columns that are absent in every row.
    pub fn trim_left(&mut self) {
        let mut removed = 0usize;
        while self.columns > 0 && self.column_is_absent(0) {
            self.remove_column_unchecked(0);
            removed += 1;
        }
        debug!(removed, "trimmed left");
    }

    /// Remove trailing columns that are absent in every row.
    pub fn trim_right(&mut self) {
        let mut removed = 0usize;
        while self.columns > 0 && self.column_is_absent(self.columns - 1) {
            self.remove_column_unchecked(self.columns - 1);
            removed += 1;
        }
        debug!(removed, "trimmed right");
    }

    pub fn trim(&mut self) {
        self.trim_left();
        self.trim_right();
    }

    /// Stable sort of the rows. Unless `affect_header` is set, row 0 keeps its place.
    pub fn sort_by<F>(&mut self, compare: F, affect_header: bool)
    where
        F: FnMut(&Row, &Row) -> Ordering,
    {
        let body = if affect_header || self.rows.is_empty() {
            &mut self.rows[..]
        } else {
            &mut self.rows[1..]
        };
        body.sort_by(compare);
        debug!(rows = body.len(), affect_header, "sorted rows");
    }

    /// Stable sort by the cells of `column`; absent cells sort first.
    pub fn sort_by_column(&mut self, column: usize, affect_header: bool) -> Result<()> {
        self.check_column_range(column)?;
        self.sort_by(
            |a, b| a.cell_or_absent(column).cmp(b.cell_or_absent(column)),
            affect_header,
        );
        Ok(())
    }

    /// Plain CSV: rows joined by `\n`, no trailing terminator.
    ///
    /// Fields holding the delimiter, a line break or `"` are quoted with inner quotes doubled. Empty
    /// values and values with leading or trailing whitespace are quoted as well, since parsing trims
    /// unquoted fields and reads a blank one as absent; this keeps `Table::parse` of the output equal
    /// to the table.
    pub fn to_csv_string(&self) -> String {
        encode::encode_table(self)
    }

    /// Space-padded rendering for terminals and logs.
    ///
    /// Fields are quoted as in [`Table::to_csv_string`], including empty and whitespace-edged values,
    /// then right-padded to the widest rendered field of their column. The last column is padded too.
    pub fn to_aligned_string(&self) -> String {
        encode::encode_table_aligned(self)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_csv_string())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Table {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.rows)
    }
}
