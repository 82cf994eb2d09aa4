use crate::constants::COMMON_ABBREVIATIONS;
use crate::types::TickerSymbol;
use std::collections::HashSet;

/// Decides whether a candidate token refers to a known security.
///
/// A token is recognized when it appears in the reference set of valid ticker symbols and
/// is not on the denylist of common false positives. Both sets are fixed once constructed.
#[derive(Debug, Clone, Default)]
pub struct TickerValidator {
    valid_ticker_symbols: HashSet<TickerSymbol>,
    denylist: HashSet<TickerSymbol>,
}

impl TickerValidator {
    pub fn new<V, D, S>(valid_ticker_symbols: V, denylist: D) -> Self
    where
        V: IntoIterator<Item = TickerSymbol>,
        D: IntoIterator<Item = S>,
        S: Into<TickerSymbol>,
    {
        Self {
            valid_ticker_symbols: valid_ticker_symbols.into_iter().collect(),
            denylist: denylist.into_iter().map(Into::into).collect(),
        }
    }

    /// Validator using the built-in list of common abbreviations as its denylist.
    pub fn with_common_abbreviations<V>(valid_ticker_symbols: V) -> Self
    where
        V: IntoIterator<Item = TickerSymbol>,
    {
        Self::new(valid_ticker_symbols, COMMON_ABBREVIATIONS.iter().copied())
    }

    pub fn is_recognized(&self, token: &str) -> bool {
        self.valid_ticker_symbols.contains(token) && !self.denylist.contains(token)
    }

    /// Keeps only the recognized tokens of `tokens`, preserving their order.
    pub fn filter<'v, 't, I>(&'v self, tokens: I) -> impl Iterator<Item = &'t str> + 'v
    where
        I: IntoIterator<Item = &'t str>,
        I::IntoIter: 'v,
        't: 'v,
    {
        tokens
            .into_iter()
            .filter(move |token| self.is_recognized(token))
    }

    pub fn valid_ticker_symbol_count(&self) -> usize {
        self.valid_ticker_symbols.len()
    }

    pub fn has_reference_data(&self) -> bool {
        !self.valid_ticker_symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(list: &[&str]) -> Vec<TickerSymbol> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_requires_reference_membership() {
        let validator = TickerValidator::new(symbols(&["GME"]), Vec::<String>::new());

        assert!(validator.is_recognized("GME"));
        assert!(!validator.is_recognized("AMC"));
    }

    #[test]
    fn test_denylist_overrides_reference() {
        let validator = TickerValidator::new(symbols(&["USA", "DD", "GME"]), ["USA", "DD"]);

        assert!(!validator.is_recognized("USA"));
        assert!(!validator.is_recognized("DD"));
        assert!(validator.is_recognized("GME"));
    }

    #[test]
    fn test_empty_reference_rejects_everything() {
        let validator = TickerValidator::with_common_abbreviations(Vec::<TickerSymbol>::new());

        assert!(!validator.has_reference_data());
        for token in ["GME", "AMC", "A", "TSLA"] {
            assert!(!validator.is_recognized(token));
        }
    }

    #[test]
    fn test_common_abbreviations_are_denied() {
        let validator = TickerValidator::with_common_abbreviations(symbols(&["AI", "YOLO", "PLTR"]));

        assert!(!validator.is_recognized("AI"));
        assert!(!validator.is_recognized("YOLO"));
        assert!(validator.is_recognized("PLTR"));
    }

    #[test]
    fn test_filter_preserves_order() {
        let validator = TickerValidator::new(symbols(&["GME", "AMC"]), ["DD"]);
        let tokens = vec!["DD", "AMC", "XYZ", "GME", "AMC"];

        let filtered: Vec<&str> = validator.filter(tokens).collect();

        assert_eq!(filtered, vec!["AMC", "GME", "AMC"]);
    }
}
