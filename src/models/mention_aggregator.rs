use crate::constants::DEFAULT_TOP_N;
use crate::types::{
    RankedTickerSymbols, TickerSymbol, TickerSymbolFrequency, TickerSymbolFrequencyMap,
};
use crate::utils::{count_ticker_symbol_frequencies, sort_results};

/// Outcome of aggregating one corpus of accepted tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MentionReport {
    /// The most mentioned ticker symbols, most frequent first.
    Ranked(RankedTickerSymbols),
    /// Not a single token survived validation.
    NoValidTickers,
}

impl MentionReport {
    pub fn ranked(&self) -> &[(TickerSymbol, TickerSymbolFrequency)] {
        match self {
            MentionReport::Ranked(ranked) => ranked,
            MentionReport::NoValidTickers => &[],
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MentionAggregator {
    top_n: usize,
}

impl Default for MentionAggregator {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_N)
    }
}

impl MentionAggregator {
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    /// Counts every accepted token without ranking or truncating.
    pub fn count<'a, I>(&self, accepted_tokens: I) -> TickerSymbolFrequencyMap
    where
        I: IntoIterator<Item = &'a str>,
    {
        count_ticker_symbol_frequencies(accepted_tokens)
            .into_iter()
            .collect()
    }

    /// Builds a ranked report of at most `top_n` entries. Ties keep first-mention order.
    pub fn aggregate<'a, I>(&self, accepted_tokens: I) -> MentionReport
    where
        I: IntoIterator<Item = &'a str>,
    {
        let frequencies = count_ticker_symbol_frequencies(accepted_tokens);

        if frequencies.is_empty() {
            return MentionReport::NoValidTickers;
        }

        MentionReport::Ranked(sort_results(frequencies, self.top_n))
    }
}
