#![doc = include_str!("../README.md")]

pub mod error;
pub mod options;
pub mod value;
pub mod decode;
pub mod encode;
pub mod table;

pub use crate::error::{Error, Result};
pub use crate::options::{Delimiter, Options};
pub use crate::table::{Row, RowMut, Table};
pub use crate::value::Cell;

use std::io::{Read, Write};

pub fn decode_from_str(s: &str, options: &Options) -> Table {
    Table::parse(s, options.delimiter.as_char())
}

pub fn decode_from_reader<R: Read>(mut reader: R, options: &Options) -> Result<Table> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    Ok(decode_from_str(&s, options))
}

/// Render `table` with its own delimiter, aligned or plain per `options`.
pub fn encode_to_string(table: &Table, options: &Options) -> String {
    if options.aligned {
        table.to_aligned_string()
    } else {
        table.to_csv_string()
    }
}

pub fn encode_to_writer<W: Write>(mut writer: W, table: &Table, options: &Options) -> Result<()> {
    let s = encode_to_string(table, options);
    writer.write_all(s.as_bytes())?;
    Ok(())
}
