#[cfg(doctest)]
doc_comment::doctest!("../README.md");

pub mod config;
pub use config::AppConfig;
pub mod constants;
pub mod models;
pub use models::{
    compose_digest, CandidateExtractor, Error, FeedReport, MentionAggregator, MentionPipeline,
    MentionPipelineConfig, MentionReport, TickerValidator,
};
pub mod sources;
pub use sources::{
    deliver_digest, load_valid_tickers, FeedSource, Notifier, ReferenceTickerSource,
};
pub mod types;
pub use types::{
    FeedItem, FeedName, RankedTickerSymbols, TickerSymbol, TickerSymbolFrequency,
    TickerSymbolFrequencyMap,
};
pub mod utils;
pub use utils::{parse_ticker_listing, sort_results};

/// Counts every recognized ticker symbol mentioned in `text`.
pub fn extract_ticker_mentions(
    text: &str,
    validator: &TickerValidator,
) -> Result<TickerSymbolFrequencyMap, Error> {
    let extractor = CandidateExtractor::new()?;
    let aggregator = MentionAggregator::default();

    Ok(aggregator.count(validator.filter(extractor.candidates(text))))
}

/// Ranks the `top_n` most mentioned recognized ticker symbols in `text`.
pub fn rank_ticker_mentions(
    text: &str,
    validator: &TickerValidator,
    top_n: usize,
) -> Result<MentionReport, Error> {
    let extractor = CandidateExtractor::new()?;
    let aggregator = MentionAggregator::new(top_n);

    Ok(aggregator.aggregate(validator.filter(extractor.candidates(text))))
}
