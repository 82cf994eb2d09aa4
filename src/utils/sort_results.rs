use crate::types::{RankedTickerSymbols, TickerSymbol, TickerSymbolFrequency};

/// Ranks ticker symbol frequencies and keeps the `top_n` most frequent.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** Equal frequencies keep their input order. When the input comes from
///   `count_ticker_symbol_frequencies`, that is the order of first mention.
///
/// ### Example:
/// ```rust
/// use ticker_mentions::sort_results;
///
/// let results = vec![
///     ("AAPL".to_string(), 10),
///     ("TSLA".to_string(), 15),
///     ("GOOGL".to_string(), 10),
/// ];
///
/// let sorted = sort_results(results, 2);
/// assert_eq!(sorted, vec![
///     ("TSLA".to_string(), 15),
///     ("AAPL".to_string(), 10),
/// ]);
/// ```
pub fn sort_results(
    results: Vec<(TickerSymbol, TickerSymbolFrequency)>,
    top_n: usize,
) -> RankedTickerSymbols {
    let mut sorted_results = results;

    // `sort_by` is stable, so ties stay in input order
    sorted_results.sort_by(|a, b| b.1.cmp(&a.1));
    sorted_results.truncate(top_n);

    sorted_results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_to_top_n() {
        let results: Vec<(TickerSymbol, TickerSymbolFrequency)> = (0..15)
            .map(|i| (format!("T{}", i), i))
            .collect();

        let sorted = sort_results(results, 10);

        assert_eq!(sorted.len(), 10);
        assert_eq!(sorted[0], ("T14".to_string(), 14));
        assert!(sorted.windows(2).all(|pair| pair[0].1 >= pair[1].1));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let results = vec![
            ("BB".to_string(), 1),
            ("NOK".to_string(), 2),
            ("AMC".to_string(), 1),
        ];

        let sorted = sort_results(results, 10);

        assert_eq!(
            sorted,
            vec![
                ("NOK".to_string(), 2),
                ("BB".to_string(), 1),
                ("AMC".to_string(), 1)
            ]
        );
    }
}
