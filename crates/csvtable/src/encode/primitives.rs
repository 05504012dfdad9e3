use std::borrow::Cow;

use crate::value::Cell;

/// Whether a value must be quoted to survive a parse with `delimiter`.
///
/// Besides delimiters, line breaks and quotes, an empty value or one with surrounding whitespace is
/// quoted, since unquoted fields are trimmed and a blank one parses as absent.
pub fn needs_quotes(s: &str, delimiter: char) -> bool {
    if s.is_empty() || s.trim().len() != s.len() {
        return true;
    }
    s.chars()
        .any(|c| c == delimiter || matches!(c, '\n' | '\r' | '"'))
}

pub fn escape_and_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    escape_and_quote_into(&mut out, s);
    out
}

pub fn escape_and_quote_into(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        if ch == '"' {
            out.push('"');
        }
        out.push(ch);
    }
    out.push('"');
}

pub fn format_string(s: &str, delimiter: char) -> Cow<'_, str> {
    if needs_quotes(s, delimiter) {
        Cow::Owned(escape_and_quote(s))
    } else {
        Cow::Borrowed(s)
    }
}

/// Render a cell as one CSV field. Absent cells render as nothing.
pub fn format_cell(cell: &Cell, delimiter: char) -> Cow<'_, str> {
    match cell {
        Cell::Absent => Cow::Borrowed(""),
        Cell::Text(s) => format_string(s, delimiter),
    }
}

/// Display width of a rendered field, in characters.
pub fn rendered_width(cell: &Cell, delimiter: char) -> usize {
    format_cell(cell, delimiter).chars().count()
}
