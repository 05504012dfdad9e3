use csvtable::{Cell, Error, Table};

#[test]
fn parse_counts_rows_and_columns() {
    let table = Table::parse("Name,Age\nJohn,30\n\nAlice,25", ',');
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.column_count(), 2);
    assert_eq!(table.delimiter(), ',');
}

#[test]
fn column_count_is_widest_row() -> Result<(), Box<dyn std::error::Error>> {
    let table = Table::parse("a\nb,c,d\ne,f", ',');
    assert_eq!(table.column_count(), 3);
    // rows keep their parsed widths until reconciled
    assert_eq!(table.row(0)?.len(), 1);
    assert_eq!(table.row(1)?.len(), 3);
    assert_eq!(table.row(2)?.len(), 2);
    Ok(())
}

#[test]
fn empty_source_is_empty_table() {
    let table = Table::parse("", ',');
    assert!(table.is_empty());
    assert_eq!(table.column_count(), 0);
    assert_eq!(table, Table::new());
}

#[test]
fn header_of_empty_table_fails() {
    let table = Table::new();
    let err = table.header().unwrap_err();
    assert!(matches!(err, Error::RowOutOfRange { index: 0, len: 0 }));
}

#[test]
fn row_out_of_range_reports_index_and_range() {
    let table = Table::parse("a\nb", ',');
    let err = table.row(2).unwrap_err();
    assert!(matches!(err, Error::RowOutOfRange { index: 2, len: 2 }));
    assert_eq!(err.to_string(), "row 2 is out of bounds [0, 2)");
}

#[test]
fn add_row_has_column_count_absent_cells() -> Result<(), Box<dyn std::error::Error>> {
    let mut table = Table::parse("a,b,c", ',');
    let row = table.add_row();
    assert_eq!(row.index(), 1);
    assert_eq!(row.len(), 3);
    assert!(row.iter().all(Cell::is_absent));
    assert_eq!(table.row_count(), 2);
    Ok(())
}

#[test]
fn insert_row_shifts_following_rows() -> Result<(), Box<dyn std::error::Error>> {
    let mut table = Table::parse("h\nx\ny", ',');
    table.insert_row(1)?.set(0, "new")?;
    assert_eq!(table.to_csv_string(), "h\nnew\nx\ny");

    // inserting at row_count appends
    table.insert_row(4)?.set(0, "tail")?;
    assert_eq!(table.row(4)?.get(0)?, &Cell::from("tail"));

    assert!(matches!(
        table.insert_row(9),
        Err(Error::RowOutOfRange { index: 9, len: 5 })
    ));
    Ok(())
}

#[test]
fn remove_row_returns_owned_row() -> Result<(), Box<dyn std::error::Error>> {
    let mut table = Table::parse("h\nx\ny", ',');
    let removed = table.remove_row(1)?;
    assert_eq!(removed.get(0)?, &Cell::from("x"));
    assert_eq!(table.to_csv_string(), "h\ny");
    assert!(table.remove_row(2).is_err());
    assert_eq!(table.row_count(), 2);
    Ok(())
}

#[test]
fn swap_rows_validates_equal_indices() -> Result<(), Box<dyn std::error::Error>> {
    let mut table = Table::parse("a\nb", ',');
    table.swap_rows(0, 1)?;
    assert_eq!(table.to_csv_string(), "b\na");
    table.swap_rows(1, 1)?;
    assert!(matches!(
        table.swap_rows(3, 3),
        Err(Error::RowOutOfRange { index: 3, .. })
    ));
    assert!(table.swap_rows(0, 3).is_err());
    assert_eq!(table.to_csv_string(), "b\na");
    Ok(())
}

#[test]
fn clear_rows_sets_absent_and_keeps_shape() -> Result<(), Box<dyn std::error::Error>> {
    let mut table = Table::parse("a,b\nc,d", ',');
    table.clear_rows();
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.column_count(), 2);
    assert!(table.rows().all(|r| r.iter().all(Cell::is_absent)));
    assert_eq!(table.to_csv_string(), ",\n,");
    Ok(())
}

#[test]
fn row_cell_access() -> Result<(), Box<dyn std::error::Error>> {
    let mut table = Table::parse("a,b,c", ',');
    let mut row = table.row_mut(0)?;
    assert_eq!(row.first()?, &Cell::from("a"));
    assert_eq!(row.last()?, &Cell::from("c"));
    row.set(1, "B")?;
    row.clear_at(2)?;
    assert!(row.get(2)?.is_absent());
    assert!(matches!(
        row.get(3),
        Err(Error::ColumnOutOfRange { index: 3, len: 3 })
    ));
    row.swap(0, 1)?;
    row.swap(7, 7)?;
    assert!(row.swap(0, 7).is_err());
    assert_eq!(table.to_csv_string(), "B,a,");

    table.header_mut()?.clear();
    assert_eq!(table.to_csv_string(), ",,");
    Ok(())
}

#[test]
fn row_swap_with_equal_out_of_range_indices_is_a_no_op() -> Result<(), Box<dyn std::error::Error>> {
    let mut table = Table::parse("a,b,c", ',');
    let mut row = table.row_mut(0)?;
    row.swap(7, 7)?;
    row.swap(3, 3)?;
    assert_eq!(table.to_csv_string(), "a,b,c");

    let mut empty = Table::new();
    empty.add_row().swap(0, 0)?;
    assert_eq!(empty.row(0)?.len(), 0);
    Ok(())
}

#[test]
fn last_of_zero_width_row_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut table = Table::new();
    let row = table.add_row();
    assert!(row.is_empty());
    assert!(row.last().is_err());
    assert!(row.first().is_err());
    Ok(())
}

#[test]
fn add_on_one_row_widens_whole_table() -> Result<(), Box<dyn std::error::Error>> {
    let mut table = Table::parse("a,b\nc,d", ',');
    table.row_mut(1)?.add("e");
    assert_eq!(table.column_count(), 3);
    assert_eq!(table.row(0)?.len(), 3);
    assert!(table.row(0)?.get(2)?.is_absent());
    assert_eq!(table.to_csv_string(), "a,b,\nc,d,e");
    Ok(())
}

#[test]
fn add_on_short_row_narrows_table_to_that_row() -> Result<(), Box<dyn std::error::Error>> {
    let mut table = Table::parse("a,b,c,d\nx", ',');
    table.row_mut(1)?.add("y");
    assert_eq!(table.column_count(), 2);
    assert_eq!(table.to_csv_string(), "a,b\nx,y");
    Ok(())
}

#[test]
fn add_row_then_fill_with_add() -> Result<(), Box<dyn std::error::Error>> {
    let mut table = Table::new();
    let mut row = table.add_row();
    row.add("id");
    row.add(Some("name"));
    row.add(None::<String>);
    assert_eq!(row.table().column_count(), 3);
    assert_eq!(table.to_csv_string(), "id,name,");
    Ok(())
}
