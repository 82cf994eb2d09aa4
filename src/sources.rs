use crate::types::{FeedItem, TickerSymbol};
use crate::Error;
use log::{error, info, warn};
use std::collections::HashSet;

pub mod alpha_vantage_listing_source;
pub use alpha_vantage_listing_source::AlphaVantageListingSource;

pub mod reddit_feed_source;
pub use reddit_feed_source::{RedditCredentials, RedditFeedSource};

pub mod telegram_notifier;
pub use telegram_notifier::TelegramNotifier;

/// Supplies the text items posted to a feed on the current UTC day.
pub trait FeedSource {
    /// Fetches at most `limit` recent items of `feed_name` and keeps those created today.
    fn fetch_today_items(&mut self, feed_name: &str, limit: usize)
        -> Result<Vec<FeedItem>, Error>;
}

/// Supplies the reference set of ticker symbols that count as real securities.
pub trait ReferenceTickerSource {
    fn fetch_valid_tickers(&self) -> Result<HashSet<TickerSymbol>, Error>;
}

/// Delivers a text payload to a fixed destination.
pub trait Notifier {
    fn notify(&self, message: &str) -> Result<(), Error>;
}

/// Fetches the reference ticker set, degrading to an empty set when it is unavailable.
///
/// An empty set makes every candidate unrecognized, so each feed reports that no valid
/// tickers were found instead of the run failing.
pub fn load_valid_tickers(source: &dyn ReferenceTickerSource) -> HashSet<TickerSymbol> {
    match source.fetch_valid_tickers() {
        Ok(valid_tickers) => {
            if valid_tickers.is_empty() {
                warn!("Reference ticker listing contained no symbols");
            } else {
                info!("Loaded {} valid ticker symbols", valid_tickers.len());
            }
            valid_tickers
        }
        Err(e) => {
            warn!("Reference ticker listing unavailable: {}", e);
            HashSet::new()
        }
    }
}

/// Hands the digest to the notifier once. Failures are logged, never retried.
pub fn deliver_digest(notifier: &dyn Notifier, digest: &str) -> bool {
    match notifier.notify(digest) {
        Ok(()) => true,
        Err(e) => {
            error!("Failed to deliver digest: {}", e);
            false
        }
    }
}
