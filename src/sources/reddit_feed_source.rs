use crate::sources::FeedSource;
use crate::types::FeedItem;
use crate::utils::{collect_items_created_on, Submission};
use crate::Error;
use chrono::Utc;
use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use serde::Deserialize;

const REDDIT_TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
const REDDIT_API_BASE_URL: &str = "https://oauth.reddit.com";

/// Largest page the listing endpoints serve in one request.
const REDDIT_LISTING_PAGE_MAX: usize = 100;

/// Application-only OAuth credentials for a Reddit "script" app.
#[derive(Debug, Clone, Default)]
pub struct RedditCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
}

#[derive(Debug, Deserialize)]
struct AccessTokenResponse {
    access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
struct ListingChild {
    data: ListingSubmission,
}

#[derive(Debug, Deserialize)]
struct ListingSubmission {
    #[serde(default)]
    title: String,
    #[serde(default)]
    selftext: String,
    created_utc: f64,
}

impl From<ListingSubmission> for Submission {
    fn from(submission: ListingSubmission) -> Self {
        Submission {
            title: submission.title,
            body: submission.selftext,
            created_utc: submission.created_utc,
        }
    }
}

/// Number of items to request in the single listing fetch for a configured `limit`.
pub fn listing_page_size(limit: usize) -> usize {
    if limit > REDDIT_LISTING_PAGE_MAX {
        debug!(
            "Feed item limit {} exceeds one listing page; requesting {}",
            limit, REDDIT_LISTING_PAGE_MAX
        );
    }

    limit.min(REDDIT_LISTING_PAGE_MAX)
}

/// Decodes a subreddit listing response into submissions, newest first as served.
pub fn parse_subreddit_listing(body: &str) -> Result<Vec<Submission>, Error> {
    let listing: Listing = serde_json::from_str(body)
        .map_err(|e| Error::ParserError(format!("Failed to decode listing: {}", e)))?;

    Ok(listing
        .data
        .children
        .into_iter()
        .map(|child| child.data.into())
        .collect())
}

/// Reads the newest submissions of a subreddit through the Reddit OAuth API.
///
/// The access token is requested on first use and reused for every later feed.
pub struct RedditFeedSource {
    client: Client,
    credentials: RedditCredentials,
    access_token: Option<String>,
}

impl RedditFeedSource {
    pub fn new(client: Client, credentials: RedditCredentials) -> Self {
        Self {
            client,
            credentials,
            access_token: None,
        }
    }

    fn access_token(&mut self) -> Result<String, Error> {
        if let Some(access_token) = &self.access_token {
            return Ok(access_token.clone());
        }

        let response = self
            .client
            .post(REDDIT_TOKEN_URL)
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .header(USER_AGENT, &self.credentials.user_agent)
            .form(&[("grant_type", "client_credentials")])
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(Error::AuthError(format!(
                "Token request failed with status {}: {}",
                status, body
            )));
        }

        let token_response: AccessTokenResponse = serde_json::from_str(&body)
            .map_err(|e| Error::AuthError(format!("Failed to decode token response: {}", e)))?;

        let access_token = token_response
            .access_token
            .ok_or_else(|| Error::AuthError(format!("No access token granted: {}", body)))?;

        debug!("Obtained Reddit access token");
        self.access_token = Some(access_token.clone());

        Ok(access_token)
    }
}

impl FeedSource for RedditFeedSource {
    fn fetch_today_items(
        &mut self,
        feed_name: &str,
        limit: usize,
    ) -> Result<Vec<FeedItem>, Error> {
        let access_token = self.access_token()?;
        let url = format!("{}/r/{}/new", REDDIT_API_BASE_URL, feed_name);
        let page_size = listing_page_size(limit).to_string();

        let response = self
            .client
            .get(url)
            .bearer_auth(access_token)
            .header(USER_AGENT, &self.credentials.user_agent)
            .query(&[("limit", page_size.as_str())])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::FeedError(format!(
                "Listing for r/{} failed with status {}",
                feed_name, status
            )));
        }

        let submissions = parse_subreddit_listing(&response.text()?)?;
        let today = Utc::now().date_naive();
        let items = collect_items_created_on(&submissions, today);

        info!("Retrieved {} posts from r/{} today.", items.len(), feed_name);

        Ok(items)
    }
}
