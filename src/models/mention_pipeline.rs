use crate::constants::{DEFAULT_FEED_ITEM_LIMIT, DEFAULT_TOP_N};
use crate::models::{
    CandidateExtractor, FeedReport, MentionAggregator, MentionReport, TickerValidator,
};
use crate::sources::FeedSource;
use crate::types::{FeedItem, FeedName};
use crate::Error;
use log::{debug, error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MentionPipelineConfig {
    /// Maximum number of ranked entries per feed.
    pub top_n: usize,
    /// Upper bound on items requested from a feed in its single fetch.
    pub feed_item_limit: usize,
}

impl Default for MentionPipelineConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            feed_item_limit: DEFAULT_FEED_ITEM_LIMIT,
        }
    }
}

/// Runs feeds through extraction, validation and aggregation, one feed at a time.
pub struct MentionPipeline<'a> {
    validator: &'a TickerValidator,
    extractor: CandidateExtractor,
    aggregator: MentionAggregator,
    config: MentionPipelineConfig,
}

impl<'a> MentionPipeline<'a> {
    pub fn new(
        validator: &'a TickerValidator,
        config: MentionPipelineConfig,
    ) -> Result<Self, Error> {
        if !validator.has_reference_data() {
            warn!("No reference ticker symbols; every feed will report no valid tickers");
        } else {
            debug!(
                "Validating against {} reference ticker symbols",
                validator.valid_ticker_symbol_count()
            );
        }

        Ok(Self {
            validator,
            extractor: CandidateExtractor::new()?,
            aggregator: MentionAggregator::new(config.top_n),
            config,
        })
    }

    /// Ranks the recognized ticker mentions across all `items` of one feed.
    pub fn analyze_corpus(&self, items: &[FeedItem]) -> MentionReport {
        let corpus = items.join(" ");
        let candidates = self.extractor.candidates(&corpus);

        self.aggregator.aggregate(self.validator.filter(candidates))
    }

    /// Fetches and analyzes a single feed.
    ///
    /// A failed fetch is logged and the feed is treated as having no posts today, so the
    /// failure never reaches the other feeds.
    pub fn run_feed(&self, source: &mut dyn FeedSource, feed_name: &str) -> FeedReport {
        let items = match source.fetch_today_items(feed_name, self.config.feed_item_limit) {
            Ok(items) => items,
            Err(e) => {
                error!("Failed to retrieve posts from r/{}: {}", feed_name, e);
                Vec::new()
            }
        };

        let report = self.analyze_corpus(&items);
        debug!(
            "r/{}: {} posts, {} ranked tickers",
            feed_name,
            items.len(),
            report.ranked().len()
        );

        FeedReport::new(feed_name, items.len(), report)
    }

    pub fn run_all(
        &self,
        source: &mut dyn FeedSource,
        feed_names: &[FeedName],
    ) -> Vec<FeedReport> {
        let mut feed_reports = Vec::with_capacity(feed_names.len());

        for feed_name in feed_names {
            feed_reports.push(self.run_feed(source, feed_name));
        }

        feed_reports
    }
}
