use core::ops::{Deref, DerefMut};

use crate::{
    Error, Result,
    encode::writer::RecordWriter,
    table::Table,
    value::Cell,
};

static ABSENT: Cell = Cell::Absent;

/// One record of a [`Table`].
///
/// A row may hold more or fewer cells than its table's nominal column count until a table-wide
/// resize reconciles them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    pub(crate) fn with_len(len: usize) -> Self {
        Self {
            cells: vec![Cell::Absent; len],
        }
    }

    pub(crate) fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    fn check_range(&self, column: usize) -> Result<()> {
        if column >= self.cells.len() {
            return Err(Error::ColumnOutOfRange {
                index: column,
                len: self.cells.len(),
            });
        }
        Ok(())
    }

    pub fn get(&self, column: usize) -> Result<&Cell> {
        self.check_range(column)?;
        Ok(&self.cells[column])
    }

    /// Cell at `column`, reading past the end of the row as absent.
    pub(crate) fn cell_or_absent(&self, column: usize) -> &Cell {
        self.cells.get(column).unwrap_or(&ABSENT)
    }

    pub fn set(&mut self, column: usize, value: impl Into<Cell>) -> Result<()> {
        self.check_range(column)?;
        self.cells[column] = value.into();
        Ok(())
    }

    pub fn first(&self) -> Result<&Cell> {
        self.get(0)
    }

    pub fn last(&self) -> Result<&Cell> {
        match self.cells.last() {
            Some(cell) => Ok(cell),
            None => Err(Error::ColumnOutOfRange { index: 0, len: 0 }),
        }
    }

    /// Set the cell at `column` to absent.
    pub fn clear_at(&mut self, column: usize) -> Result<()> {
        self.check_range(column)?;
        self.cells[column] = Cell::Absent;
        Ok(())
    }

    /// Set every cell to absent. The row keeps its length.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Absent);
    }

    pub(crate) fn check_swap(&self, a: usize, b: usize) -> Result<()> {
        if a == b {
            return Ok(());
        }
        self.check_range(a)?;
        self.check_range(b)
    }

    /// Swap two cells. Equal indices are a no-op and are not validated.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        if a == b {
            return Ok(());
        }
        self.check_swap(a, b)?;
        self.cells.swap(a, b);
        Ok(())
    }

    /// Remove the cell at `column`; a row too short to have one is left alone.
    pub(crate) fn remove(&mut self, column: usize) {
        if column < self.cells.len() {
            self.cells.remove(column);
        }
    }

    /// Insert an absent cell at `column`, padding a short row up to it first.
    pub(crate) fn insert(&mut self, column: usize) {
        if self.cells.len() < column {
            self.cells.resize(column, Cell::Absent);
        }
        self.cells.insert(column, Cell::Absent);
    }

    pub(crate) fn resize(&mut self, len: usize) {
        self.cells.resize(len, Cell::Absent);
    }

    pub(crate) fn push(&mut self, value: Cell) {
        self.cells.push(value);
    }

    /// Render this row as one CSV record.
    pub fn to_csv_string(&self, delimiter: char) -> String {
        let mut w = RecordWriter::new(delimiter);
        w.record(self.cells.iter());
        w.into_string()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a Cell;
    type IntoIter = core::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Row {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.cells)
    }
}

/// Mutable access to a row that stays tied to its table.
///
/// Row-local edits go through `DerefMut`; [`RowMut::add`] also needs the table, because growing one
/// row widens every row.
pub struct RowMut<'a> {
    table: &'a mut Table,
    index: usize,
}

impl<'a> RowMut<'a> {
    pub(crate) fn new(table: &'a mut Table, index: usize) -> Self {
        Self { table, index }
    }

    /// Position of this row in its table.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn table(&self) -> &Table {
        &*self.table
    }

    /// Append a cell, then resize every row of the table to this row's new length.
    pub fn add(&mut self, value: impl Into<Cell>) {
        let row = &mut self.table.rows[self.index];
        row.push(value.into());
        let len = row.len();
        self.table.resize_columns(len);
    }
}

impl Deref for RowMut<'_> {
    type Target = Row;

    fn deref(&self) -> &Row {
        &self.table.rows[self.index]
    }
}

impl DerefMut for RowMut<'_> {
    fn deref_mut(&mut self) -> &mut Row {
        &mut self.table.rows[self.index]
    }
}
