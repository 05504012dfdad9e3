//! JSON export: a table becomes an array of arrays, absent cells become `null`.

use crate::{Result, table::Table};

pub fn to_json_string(table: &Table, pretty: bool) -> Result<String> {
    let s = if pretty {
        serde_json::to_string_pretty(table)?
    } else {
        serde_json::to_string(table)?
    };
    Ok(s)
}

pub fn to_json_value(table: &Table) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(table)?)
}
