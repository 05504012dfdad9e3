/// Field delimiter used both when parsing and when rendering a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Semicolon,
    /// Any other single character.
    Char(char),
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
            Delimiter::Semicolon => ';',
            Delimiter::Char(c) => c,
        }
    }
}

impl From<char> for Delimiter {
    fn from(c: char) -> Self {
        match c {
            ',' => Delimiter::Comma,
            '\t' => Delimiter::Tab,
            '|' => Delimiter::Pipe,
            ';' => Delimiter::Semicolon,
            other => Delimiter::Char(other),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Options {
    pub delimiter: Delimiter,
    /// Render with space-padded columns instead of plain CSV
    pub aligned: bool,
}

impl Options {
    pub fn with_delimiter(delimiter: impl Into<Delimiter>) -> Self {
        Self {
            delimiter: delimiter.into(),
            ..Self::default()
        }
    }
}
