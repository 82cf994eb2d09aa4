pub mod collect_items_created_on;
pub use collect_items_created_on::{collect_items_created_on, is_created_on, Submission};

pub mod count_ticker_symbol_frequencies;
pub use count_ticker_symbol_frequencies::count_ticker_symbol_frequencies;

pub mod parse_ticker_listing;
pub use parse_ticker_listing::parse_ticker_listing;

pub mod sort_results;
pub use sort_results::sort_results;
