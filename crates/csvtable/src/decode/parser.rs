use crate::value::Cell;

/// Split one record into raw field slices.
///
/// A delimiter inside a quoted section does not end the field. Quote characters stay in the raw
/// slices; [`classify_field`] strips and unescapes them. The last field is always emitted, so a
/// record ending with the delimiter yields a trailing empty field.
pub fn split_fields(record: &str, delimiter: char) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut in_quotes = false;
    let mut start = 0usize;
    let mut chars = record.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if in_quotes {
            if c == '"' {
                if matches!(chars.peek(), Some((_, '"'))) {
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
        } else if c == '"' {
            in_quotes = true;
        } else if c == delimiter {
            fields.push(&record[start..i]);
            start = i + c.len_utf8();
        }
    }
    fields.push(&record[start..]);
    fields
}

/// Classify a raw field.
///
/// Whitespace around the field is ignored when deciding whether it is quoted, so ` "x" ` and the
/// `"x"\r` left by a CRLF line ending both read as the quoted value `x`; the text between the quotes
/// is kept exactly. A quoted field always yields a present value, even when its content is empty or
/// blank. An unquoted field that is blank after trimming is absent; otherwise its trimmed text is the
/// value.
pub fn classify_field(raw: &str) -> Cell {
    let trimmed = raw.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        let inner = &trimmed[1..trimmed.len() - 1];
        Cell::Text(inner.replace("\"\"", "\""))
    } else if trimmed.is_empty() {
        Cell::Absent
    } else {
        Cell::Text(trimmed.to_string())
    }
}

/// Parse one record into cells.
///
/// Never fails: an unterminated quote runs to the end of the record and the field is classified on
/// a best-effort basis.
pub fn parse_line(record: &str, delimiter: char) -> Vec<Cell> {
    split_fields(record, delimiter)
        .into_iter()
        .map(classify_field)
        .collect()
}

/// Parse a whole document into rows of cells.
pub fn parse_source(source: &str, delimiter: char) -> Vec<Vec<Cell>> {
    crate::decode::scanner::iter(source)
        .map(|record| parse_line(record, delimiter))
        .collect()
}
