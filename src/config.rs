use crate::constants::{DEFAULT_FEED_ITEM_LIMIT, DEFAULT_FEED_NAMES, DEFAULT_TOP_N};
use crate::models::MentionPipelineConfig;
use crate::sources::RedditCredentials;
use crate::types::FeedName;
use log::warn;

pub const TELEGRAM_BOT_TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";
pub const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";
pub const REDDIT_CLIENT_ID_VAR: &str = "REDDIT_CLIENT_ID";
pub const REDDIT_CLIENT_SECRET_VAR: &str = "REDDIT_CLIENT_SECRET";
pub const REDDIT_USER_AGENT_VAR: &str = "REDDIT_USER_AGENT";
pub const ALPHA_VANTAGE_API_KEY_VAR: &str = "ALPHA_VANTAGE_API_KEY";
pub const FEEDS_VAR: &str = "TICKER_MENTION_FEEDS";
pub const FEED_LIMIT_VAR: &str = "TICKER_MENTION_FEED_LIMIT";
pub const TOP_N_VAR: &str = "TICKER_MENTION_TOP_N";

/// Everything a run needs, read once at startup.
///
/// Credentials are not validated here. A missing value becomes an empty string and shows up
/// later as an authentication failure from the service that needed it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
    pub reddit_client_id: String,
    pub reddit_client_secret: String,
    pub reddit_user_agent: String,
    pub alpha_vantage_api_key: String,
    pub feed_names: Vec<FeedName>,
    pub feed_item_limit: usize,
    pub top_n: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).unwrap_or_default();

        let feed_names = lookup(FEEDS_VAR)
            .map(|feeds| parse_feed_names(&feeds))
            .filter(|feeds| !feeds.is_empty())
            .unwrap_or_else(|| DEFAULT_FEED_NAMES.iter().map(|s| s.to_string()).collect());

        Self {
            telegram_bot_token: var(TELEGRAM_BOT_TOKEN_VAR),
            telegram_chat_id: var(TELEGRAM_CHAT_ID_VAR),
            reddit_client_id: var(REDDIT_CLIENT_ID_VAR),
            reddit_client_secret: var(REDDIT_CLIENT_SECRET_VAR),
            reddit_user_agent: var(REDDIT_USER_AGENT_VAR),
            alpha_vantage_api_key: var(ALPHA_VANTAGE_API_KEY_VAR),
            feed_names,
            feed_item_limit: parse_count(
                FEED_LIMIT_VAR,
                lookup(FEED_LIMIT_VAR),
                DEFAULT_FEED_ITEM_LIMIT,
            ),
            top_n: parse_count(TOP_N_VAR, lookup(TOP_N_VAR), DEFAULT_TOP_N),
        }
    }

    pub fn reddit_credentials(&self) -> RedditCredentials {
        RedditCredentials {
            client_id: self.reddit_client_id.clone(),
            client_secret: self.reddit_client_secret.clone(),
            user_agent: self.reddit_user_agent.clone(),
        }
    }

    pub fn pipeline_config(&self) -> MentionPipelineConfig {
        MentionPipelineConfig {
            top_n: self.top_n,
            feed_item_limit: self.feed_item_limit,
        }
    }
}

fn parse_feed_names(feeds: &str) -> Vec<FeedName> {
    feeds
        .split(',')
        .map(|feed| feed.trim().trim_start_matches("r/").to_string())
        .filter(|feed| !feed.is_empty())
        .collect()
}

fn parse_count(key: &str, value: Option<String>, default: usize) -> usize {
    match value {
        None => default,
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(count) if count > 0 => count,
            _ => {
                warn!("Ignoring invalid {}={:?}; using {}", key, raw, default);
                default
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        AppConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_missing_values_are_not_fatal() {
        let config = config_from(&[]);

        assert_eq!(config.telegram_bot_token, "");
        assert_eq!(config.alpha_vantage_api_key, "");
        assert_eq!(config.feed_names, vec!["pennystocks", "wallstreetbets"]);
        assert_eq!(config.feed_item_limit, 100);
        assert_eq!(config.top_n, 10);
    }

    #[test]
    fn test_reads_credentials() {
        let config = config_from(&[
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("TELEGRAM_CHAT_ID", "-100"),
            ("REDDIT_CLIENT_ID", "id"),
            ("REDDIT_CLIENT_SECRET", "secret"),
            ("REDDIT_USER_AGENT", "mentions/0.1"),
            ("ALPHA_VANTAGE_API_KEY", "demo"),
        ]);

        let credentials = config.reddit_credentials();

        assert_eq!(config.telegram_bot_token, "123:abc");
        assert_eq!(config.telegram_chat_id, "-100");
        assert_eq!(config.alpha_vantage_api_key, "demo");
        assert_eq!(credentials.client_id, "id");
        assert_eq!(credentials.client_secret, "secret");
        assert_eq!(credentials.user_agent, "mentions/0.1");
    }

    #[test]
    fn test_feed_list_override() {
        let config = config_from(&[("TICKER_MENTION_FEEDS", " r/stocks, ,options ")]);

        assert_eq!(config.feed_names, vec!["stocks", "options"]);
    }

    #[test]
    fn test_invalid_counts_fall_back() {
        let config = config_from(&[
            ("TICKER_MENTION_FEED_LIMIT", "lots"),
            ("TICKER_MENTION_TOP_N", "0"),
        ]);

        assert_eq!(config.pipeline_config(), MentionPipelineConfig::default());
    }
}
