use crate::sources::ReferenceTickerSource;
use crate::types::TickerSymbol;
use crate::utils::parse_ticker_listing;
use crate::Error;
use log::debug;
use reqwest::blocking::Client;
use std::collections::HashSet;

const ALPHA_VANTAGE_QUERY_URL: &str = "https://www.alphavantage.co/query";

/// Reference tickers from Alpha Vantage's `LISTING_STATUS` endpoint, which serves the
/// currently active US listings as CSV.
pub struct AlphaVantageListingSource {
    client: Client,
    api_key: String,
}

impl AlphaVantageListingSource {
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
        }
    }
}

impl ReferenceTickerSource for AlphaVantageListingSource {
    fn fetch_valid_tickers(&self) -> Result<HashSet<TickerSymbol>, Error> {
        let response = self
            .client
            .get(ALPHA_VANTAGE_QUERY_URL)
            .query(&[("function", "LISTING_STATUS"), ("apikey", &self.api_key)])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::FeedError(format!(
                "Listing request failed with status {}",
                status
            )));
        }

        let listing = response.text()?;
        debug!("Received {} bytes of listing data", listing.len());

        parse_ticker_listing(&listing)
    }
}
