/// Shape of a candidate ticker symbol: one to five uppercase ASCII letters on word boundaries.
pub const TICKER_SHAPE_PATTERN: &str = r"\b[A-Z]{1,5}\b";

/// Ticker-shaped tokens that show up constantly in discussion text without referring to
/// the security of the same symbol.
pub const COMMON_ABBREVIATIONS: &[&str] = &[
    "DD", "A", "S", "U", "FDA", "ESG", "AI", "I", "PR", "USA", "P", "Q", "T", "B", "M", "YOLO",
];

pub const DEFAULT_TOP_N: usize = 10;

pub const DEFAULT_FEED_ITEM_LIMIT: usize = 100;

pub const DEFAULT_FEED_NAMES: &[&str] = &["pennystocks", "wallstreetbets"];

pub const REPORT_TITLE: &str = "Reddit Stocks Update!";

pub const NO_VALID_TICKERS_MESSAGE: &str = "No valid tickers found.";
