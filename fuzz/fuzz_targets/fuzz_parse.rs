#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let table = csvtable::Table::parse(s, ',');
        let _ = table.to_csv_string();
        let _ = table.to_aligned_string();
    }
});
