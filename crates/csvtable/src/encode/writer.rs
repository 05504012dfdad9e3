use crate::value::Cell;

/// Accumulates CSV records into a single string.
///
/// Records are separated by `\n`; no terminator follows the last one.
pub struct RecordWriter {
    out: String,
    delimiter: char,
    pad_cache: String,
    records: usize,
    fields: usize,
}

impl RecordWriter {
    pub fn new(delimiter: char) -> Self {
        Self {
            out: String::new(),
            delimiter,
            pad_cache: String::new(),
            records: 0,
            fields: 0,
        }
    }

    fn write_pad(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        if self.pad_cache.len() < n {
            self.pad_cache
                .extend(core::iter::repeat(' ').take(n - self.pad_cache.len()));
        }
        self.out.push_str(&self.pad_cache[..n]);
    }

    fn write_separator(&mut self) {
        if self.fields > 0 {
            self.out.push(self.delimiter);
        }
        self.fields += 1;
    }

    /// Start a new record, terminating the previous one.
    pub fn begin_record(&mut self) {
        if self.records > 0 {
            self.out.push('\n');
        }
        self.records += 1;
        self.fields = 0;
    }

    pub fn field(&mut self, cell: &Cell) {
        self.write_separator();
        let formatted = crate::encode::primitives::format_cell(cell, self.delimiter);
        self.out.push_str(&formatted);
    }

    /// Write a field right-padded with spaces to `width` characters.
    pub fn field_padded(&mut self, cell: &Cell, width: usize) {
        self.write_separator();
        let formatted = crate::encode::primitives::format_cell(cell, self.delimiter);
        let len = formatted.chars().count();
        self.out.push_str(&formatted);
        self.write_pad(width.saturating_sub(len));
    }

    pub fn record<'c>(&mut self, cells: impl IntoIterator<Item = &'c Cell>) {
        self.begin_record();
        for cell in cells {
            self.field(cell);
        }
    }

    pub fn record_aligned<'c>(&mut self, cells: impl IntoIterator<Item = &'c Cell>, widths: &[usize]) {
        self.begin_record();
        for (i, cell) in cells.into_iter().enumerate() {
            self.field_padded(cell, widths.get(i).copied().unwrap_or(0));
        }
    }

    pub fn into_string(self) -> String {
        self.out
    }
}
