//! Fuzz target for the cleaning pipeline.
//!
//! The first byte picks the options, the rest is parsed as CSV.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sweeper::{CleaningOptions, MissingStrategy, Parser, clean};

fuzz_target!(|data: &[u8]| {
    let Some((&flags, rest)) = data.split_first() else {
        return;
    };
    if rest.len() > 100_000 {
        return;
    }

    let options = CleaningOptions::new()
        .with_remove_duplicates(flags & 1 != 0)
        .with_missing(MissingStrategy::ALL[usize::from(flags >> 1) % 3])
        .with_remove_outliers(flags & 8 != 0);

    if let Ok((table, _)) = Parser::new().parse_bytes("fuzz.csv", rest) {
        let cleaned = clean(&table, &options);
        assert!(cleaned.row_count() <= table.row_count());
        assert_eq!(cleaned.column_names(), table.column_names());
    }
});
