#![no_main]
use libfuzzer_sys::fuzz_target;

// Parse, render, parse again: the second parse must match the first.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let first = csvtable::Table::parse(s, ',');
        let encoded = first.to_csv_string();
        let second = csvtable::Table::parse(&encoded, ',');
        if first != second {
            panic!(
                "CSV roundtrip mismatch!\nInput: {:?}\nRe-encoded: {:?}\nFirst: {:?}\nSecond: {:?}",
                s, encoded, first, second
            );
        }
    }
});
