use crate::constants::TICKER_SHAPE_PATTERN;
use crate::Error;
use regex::{Matches, Regex};

/// Scans free text for ticker-shaped tokens.
///
/// Extraction is purely lexical: every run of one to five uppercase ASCII letters that sits
/// on word boundaries is a candidate, whether or not it names a real security. Repeated
/// tokens are emitted every time they occur, in left-to-right order.
#[derive(Debug, Clone)]
pub struct CandidateExtractor {
    ticker_shape: Regex,
}

impl CandidateExtractor {
    pub fn new() -> Result<Self, Error> {
        let ticker_shape = Regex::new(TICKER_SHAPE_PATTERN)?;

        Ok(Self { ticker_shape })
    }

    /// Returns a lazy sequence of candidate tokens found in `text`.
    ///
    /// Calling this again on the same text restarts the scan from the beginning.
    pub fn candidates<'r, 't>(&'r self, text: &'t str) -> Candidates<'r, 't> {
        Candidates {
            matches: self.ticker_shape.find_iter(text),
        }
    }
}

/// Iterator over the candidate tokens of a single text, borrowed from that text.
#[derive(Debug)]
pub struct Candidates<'r, 't> {
    matches: Matches<'r, 't>,
}

impl<'r, 't> Iterator for Candidates<'r, 't> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        self.matches.next().map(|m| m.as_str())
    }
}
