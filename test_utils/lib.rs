pub mod constants;
pub mod fakes;

use csv::Reader;
use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::{fs, path::Path};
use ticker_mentions::{TickerSymbol, TickerSymbolFrequency, TickerValidator};

const EXPECTED_DIRECTIVE: &str = "EXPECTED:";
const COMMENT_DIRECTIVE: &str = "COMMENT:";

/// Utility to load reference symbols from a listing-style CSV file for testing and
/// benchmarking.
pub fn load_symbols_from_file(file_path: &str) -> Result<HashSet<TickerSymbol>, Box<dyn Error>> {
    let mut symbols = HashSet::new();
    let mut reader = Reader::from_path(file_path)?;

    for record in reader.records() {
        let record = record?;
        match record.get(0) {
            Some(symbol) if !symbol.trim().is_empty() => {
                symbols.insert(symbol.trim().to_string());
            }
            _ => eprintln!("Skipping invalid row: {:?}", record),
        }
    }

    Ok(symbols)
}

/// Validator over the test symbol listing, with the built-in denylist.
pub fn load_test_validator() -> TickerValidator {
    let symbols = load_symbols_from_file(constants::TEST_SYMBOLS_CSV_PATH)
        .expect("Failed to load symbols from CSV");

    TickerValidator::with_common_abbreviations(symbols)
}

// Helper function to get the expected mention counts from a test file.
// Each `EXPECTED: SYMBOL COUNT` line contributes one entry.
pub fn get_expected_mentions(file_path: &Path) -> HashMap<TickerSymbol, TickerSymbolFrequency> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .filter_map(|line| line.trim().strip_prefix(EXPECTED_DIRECTIVE))
        .map(|expectation| {
            let mut parts = expectation.split_whitespace();
            let symbol = parts.next().expect("EXPECTED line without a symbol");
            let count = parts
                .next()
                .and_then(|count| count.parse().ok())
                .expect("EXPECTED line without a count");

            (symbol.to_string(), count)
        })
        .collect()
}

// Helper function to drop directive lines, leaving only the document text
pub fn strip_directives(raw_text: &str) -> String {
    raw_text
        .lines()
        .filter(|line| {
            let line = line.trim_start();
            !line.starts_with(EXPECTED_DIRECTIVE) && !line.starts_with(COMMENT_DIRECTIVE)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
