use crate::types::{TickerSymbol, TickerSymbolFrequency};
use std::collections::HashMap;

/// Counts the frequency of ticker symbols in the given sequence.
///
/// # Arguments
/// * `ticker_symbols` - The ticker symbols to analyze, in the order they were encountered.
///
/// # Returns
/// * `(TickerSymbol, TickerSymbolFrequency)` pairs, one per distinct symbol, in order of
///   first appearance. Keeping that order lets callers break frequency ties by whichever
///   symbol was mentioned first.
pub fn count_ticker_symbol_frequencies<'a, I>(
    ticker_symbols: I,
) -> Vec<(TickerSymbol, TickerSymbolFrequency)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut frequencies: Vec<(TickerSymbol, TickerSymbolFrequency)> = Vec::new();
    let mut positions: HashMap<&'a str, usize> = HashMap::new();

    for ticker_symbol in ticker_symbols {
        match positions.get(ticker_symbol) {
            Some(&position) => frequencies[position].1 += 1,
            None => {
                positions.insert(ticker_symbol, frequencies.len());
                frequencies.push((ticker_symbol.to_string(), 1));
            }
        }
    }

    frequencies
}
