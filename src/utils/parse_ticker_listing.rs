use crate::types::TickerSymbol;
use crate::Error;
use csv::{ReaderBuilder, Trim};
use std::collections::HashSet;
use std::io::Cursor;

const LISTING_SYMBOL_HEADER: &str = "symbol";

/// Parses a comma-separated security listing into a set of ticker symbols.
///
/// The first field of each record is taken as the symbol. The header row must start with a
/// `symbol` column; anything else (e.g. a JSON throttling notice served in place of the
/// listing) is rejected. Blank lines, including trailing ones, are skipped.
///
/// Quotes carry no meaning: every line is its own record, so a stray `"` in a company name
/// never spills into the records that follow.
pub fn parse_ticker_listing(listing: &str) -> Result<HashSet<TickerSymbol>, Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(Cursor::new(listing));

    let headers = reader.headers()?;

    match headers.get(0) {
        Some(header) if header.eq_ignore_ascii_case(LISTING_SYMBOL_HEADER) => {}
        Some(header) => {
            return Err(Error::ParserError(format!(
                "Unexpected listing header: {:?}",
                header
            )))
        }
        None => return Err(Error::ParserError("Listing is empty".to_string())),
    }

    let mut ticker_symbols = HashSet::new();

    for record in reader.records() {
        let record = record?;

        if let Some(symbol) = record.get(0).filter(|symbol| !symbol.is_empty()) {
            ticker_symbols.insert(symbol.to_string());
        }
    }

    Ok(ticker_symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_first_field() {
        let listing = "symbol,name,exchange,assetType,ipoDate,delistingDate,status\n\
                       A,Agilent Technologies Inc,NYSE,Stock,1999-11-18,null,Active\n\
                       GME,GameStop Corp,NYSE,Stock,2002-02-13,null,Active\n";

        let symbols = parse_ticker_listing(listing).unwrap();

        assert_eq!(symbols.len(), 2);
        assert!(symbols.contains("A"));
        assert!(symbols.contains("GME"));
    }

    #[test]
    fn test_tolerates_trailing_blank_lines() {
        let listing = "symbol,name\r\nAMC,AMC Entertainment\r\n\r\n\r\n";

        let symbols = parse_ticker_listing(listing).unwrap();

        assert_eq!(symbols.len(), 1);
        assert!(symbols.contains("AMC"));
    }

    #[test]
    fn test_quoted_names_with_commas() {
        let listing = "symbol,name,exchange\nBRK-A,\"Berkshire Hathaway, Inc.\",NYSE\n";

        let symbols = parse_ticker_listing(listing).unwrap();

        assert!(symbols.contains("BRK-A"));
    }

    #[test]
    fn test_unbalanced_quote_stays_on_its_line() {
        let listing = "symbol,name,exchange\n\
                       AAA,\"Open quote name,NYSE\n\
                       GME,GameStop,NYSE\n\
                       AMC,AMC Ent,NYSE\n";

        let symbols = parse_ticker_listing(listing).unwrap();

        assert_eq!(symbols.len(), 3);
        assert!(symbols.contains("AAA"));
        assert!(symbols.contains("GME"));
        assert!(symbols.contains("AMC"));
    }

    #[test]
    fn test_rejects_non_listing_body() {
        let body = "{\n    \"Information\": \"Thank you for using Alpha Vantage!\"\n}";

        assert!(parse_ticker_listing(body).is_err());
    }

    #[test]
    fn test_rejects_empty_body() {
        assert!(parse_ticker_listing("").is_err());
    }
}
