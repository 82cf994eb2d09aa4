use crate::constants::{NO_VALID_TICKERS_MESSAGE, REPORT_TITLE};
use crate::models::MentionReport;
use crate::types::FeedName;
use std::fmt;

/// The rendered result of running one feed through the mention pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedReport {
    pub feed_name: FeedName,
    /// Number of same-day items the feed contributed. Zero when retrieval failed.
    pub post_count: usize,
    pub report: MentionReport,
}

impl FeedReport {
    pub fn new(feed_name: impl Into<FeedName>, post_count: usize, report: MentionReport) -> Self {
        Self {
            feed_name: feed_name.into(),
            post_count,
            report,
        }
    }
}

impl fmt::Display for FeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\nTop mentioned tickers in r/{} today:", self.feed_name)?;

        match &self.report {
            MentionReport::Ranked(ranked) => {
                for (ticker_symbol, frequency) in ranked {
                    write!(f, "\n{}: {}", ticker_symbol, frequency)?;
                }
            }
            MentionReport::NoValidTickers => write!(f, "\n{}", NO_VALID_TICKERS_MESSAGE)?,
        }

        Ok(())
    }
}

/// Joins per-feed sections under a single title, ready to hand to a notifier.
pub fn compose_digest(feed_reports: &[FeedReport]) -> String {
    let sections: Vec<String> = feed_reports.iter().map(ToString::to_string).collect();

    format!("{}\n{}", REPORT_TITLE, sections.join("\n\n"))
}
