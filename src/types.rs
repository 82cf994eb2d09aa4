use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a ticker symbol (e.g., stock ticker) as an owned `String`.
pub type TickerSymbol = String;

/// Represents the total number occurrences of a ticker symbol within a feed's daily corpus.
pub type TickerSymbolFrequency = usize;

/// Represents a map of ticker symbols to their frequency counts within a feed's daily corpus.
/// The key is the `TickerSymbol`, and the value is the `TickerSymbolFrequency`.
pub type TickerSymbolFrequencyMap = HashMap<TickerSymbol, TickerSymbolFrequency>;

/// Ticker symbols paired with their frequencies, ordered by frequency (descending).
pub type RankedTickerSymbols = Vec<(TickerSymbol, TickerSymbolFrequency)>;

/// The name of a discussion feed (e.g. a subreddit name without the `r/` prefix).
pub type FeedName = String;

/// A single text item retrieved from a feed: its title and body joined by a space.
pub type FeedItem = String;
