use csvtable::{Cell, Table};

#[test]
fn trim_left_removes_absent_leading_column() -> Result<(), Box<dyn std::error::Error>> {
    let mut table = Table::parse(",x\n,y", ',');
    table.trim_left();
    assert_eq!(table.column_count(), 1);
    assert_eq!(table.row(0)?.cells(), &[Cell::from("x")]);
    assert_eq!(table.row(1)?.cells(), &[Cell::from("y")]);
    Ok(())
}

#[test]
fn quoted_empty_blocks_trim_left() {
    let mut table = Table::parse("\"\",x", ',');
    table.trim_left();
    assert_eq!(table.column_count(), 2);
    assert_eq!(table.to_csv_string(), "\"\",x");
}

#[test]
fn single_present_cell_halts_trim() {
    let mut table = Table::parse(",,a,,\n,b,c,,\n,,,d,", ',');
    table.trim();
    assert_eq!(table.column_count(), 3);
    assert_eq!(table.to_csv_string(), ",a,\nb,c,\n,,d");
}

#[test]
fn trim_right_removes_trailing_absent_columns() {
    let mut table = Table::parse("a,b,,\nc,,  ,", ',');
    table.trim_right();
    assert_eq!(table.column_count(), 2);
    assert_eq!(table.to_csv_string(), "a,b\nc,");
}

#[test]
fn short_rows_read_as_absent() {
    let mut table = Table::parse("a,b,\nc", ',');
    table.trim_right();
    assert_eq!(table.column_count(), 2);
    assert_eq!(table.to_csv_string(), "a,b\nc,");
}

#[test]
fn trim_is_idempotent() {
    let mut once = Table::parse(",a,,\n,,b,\n,,,", ',');
    once.trim();
    let mut twice = once.clone();
    twice.trim();
    assert_eq!(once, twice);
    assert_eq!(once.to_csv_string(), "a,\n,b\n,");
}

#[test]
fn all_absent_table_trims_to_zero_columns() {
    let mut table = Table::parse(",,\n , ,", ',');
    table.trim();
    assert_eq!(table.column_count(), 0);
    assert_eq!(table.row_count(), 2);
    assert!(table.rows().all(|r| r.is_empty()));

    // already at zero columns: nothing left to remove
    table.trim_left();
    table.trim_right();
    assert_eq!(table.column_count(), 0);
}

#[test]
fn trim_on_empty_table_is_a_no_op() {
    let mut table = Table::new();
    table.trim();
    assert_eq!(table.column_count(), 0);
    assert!(table.is_empty());
}
