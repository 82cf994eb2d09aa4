use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use ticker_mentions::{Error, FeedItem, FeedSource, Notifier, ReferenceTickerSource, TickerSymbol};

/// Serves canned items per feed. Feeds listed in `failing` return an error instead.
#[derive(Debug, Default)]
pub struct StaticFeedSource {
    items: HashMap<String, Vec<FeedItem>>,
    failing: HashSet<String>,
    pub requests: Vec<(String, usize)>,
}

impl StaticFeedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_feed(mut self, feed_name: &str, items: &[&str]) -> Self {
        self.items.insert(
            feed_name.to_string(),
            items.iter().map(|item| item.to_string()).collect(),
        );
        self
    }

    pub fn with_failing_feed(mut self, feed_name: &str) -> Self {
        self.failing.insert(feed_name.to_string());
        self
    }
}

impl FeedSource for StaticFeedSource {
    fn fetch_today_items(
        &mut self,
        feed_name: &str,
        limit: usize,
    ) -> Result<Vec<FeedItem>, Error> {
        self.requests.push((feed_name.to_string(), limit));

        if self.failing.contains(feed_name) {
            return Err(Error::AuthError(format!("401 Unauthorized for r/{}", feed_name)));
        }

        Ok(self
            .items
            .get(feed_name)
            .map(|items| items.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }
}

/// Reference source returning a fixed set, or failing when `None`.
pub struct StaticReferenceSource(pub Option<HashSet<TickerSymbol>>);

impl StaticReferenceSource {
    pub fn with_symbols(symbols: &[&str]) -> Self {
        Self(Some(symbols.iter().map(|s| s.to_string()).collect()))
    }

    pub fn unavailable() -> Self {
        Self(None)
    }
}

impl ReferenceTickerSource for StaticReferenceSource {
    fn fetch_valid_tickers(&self) -> Result<HashSet<TickerSymbol>, Error> {
        self.0
            .clone()
            .ok_or_else(|| Error::FeedError("Listing request failed with status 503".to_string()))
    }
}

/// Records every delivered message. When `reject` is set, delivery fails after recording.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub messages: RefCell<Vec<String>>,
    pub reject: bool,
}

impl RecordingNotifier {
    pub fn rejecting() -> Self {
        Self {
            messages: RefCell::new(Vec::new()),
            reject: true,
        }
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) -> Result<(), Error> {
        self.messages.borrow_mut().push(message.to_string());

        if self.reject {
            return Err(Error::NotificationError(
                "Failed to send message (400). Response: chat not found".to_string(),
            ));
        }

        Ok(())
    }
}
