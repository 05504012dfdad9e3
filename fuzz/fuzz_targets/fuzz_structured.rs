#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    AddRow,
    InsertRow(u8),
    RemoveRow(u8),
    SwapRows(u8, u8),
    InsertColumn(u8),
    RemoveColumn(u8),
    SwapColumns(u8, u8),
    Resize(i8),
    Set(u8, u8, Option<String>),
    Add(u8, Option<String>),
    Trim,
    SortByColumn(u8, bool),
}

#[derive(Arbitrary, Debug)]
struct Input {
    source: String,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let mut table = csvtable::Table::parse(&input.source, ',');
    for op in input.ops {
        let before = table.clone();
        let result = match op {
            Op::AddRow => {
                table.add_row();
                Ok(())
            }
            Op::InsertRow(i) => table.insert_row(i as usize).map(|_| ()),
            Op::RemoveRow(i) => table.remove_row(i as usize).map(|_| ()),
            Op::SwapRows(a, b) => table.swap_rows(a as usize, b as usize),
            Op::InsertColumn(i) => table.insert_column(i as usize),
            Op::RemoveColumn(i) => table.remove_column(i as usize),
            Op::SwapColumns(a, b) => table.swap_columns(a as usize, b as usize),
            Op::Resize(n) => table.resize_table(n as isize),
            Op::Set(r, c, v) => table
                .row_mut(r as usize)
                .and_then(|mut row| row.set(c as usize, v)),
            Op::Add(r, v) => table.row_mut(r as usize).map(|mut row| row.add(v)),
            Op::Trim => {
                table.trim();
                Ok(())
            }
            Op::SortByColumn(c, h) => table.sort_by_column(c as usize, h),
        };
        // failed operations leave the table untouched
        if result.is_err() {
            assert_eq!(table, before);
        }
    }
    let _ = table.to_aligned_string();
});
