use log::{debug, error, info};
use reqwest::blocking::Client;
use ticker_mentions::sources::{AlphaVantageListingSource, RedditFeedSource, TelegramNotifier};
use ticker_mentions::{
    compose_digest, deliver_digest, load_valid_tickers, AppConfig, Error, MentionPipeline,
    TickerValidator,
};

fn main() {
    #[cfg(feature = "logger-support")]
    env_logger::init();

    if let Err(e) = run() {
        error!("Ticker mention run failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    if let Err(e) = dotenvy::dotenv() {
        debug!("No .env file loaded: {}", e);
    }

    let config = AppConfig::from_env();
    let client = Client::builder().build()?;

    let reference_source =
        AlphaVantageListingSource::new(client.clone(), config.alpha_vantage_api_key.as_str());
    let valid_tickers = load_valid_tickers(&reference_source);
    let validator = TickerValidator::with_common_abbreviations(valid_tickers);

    let pipeline = MentionPipeline::new(&validator, config.pipeline_config())?;
    let mut feed_source = RedditFeedSource::new(client.clone(), config.reddit_credentials());
    let feed_reports = pipeline.run_all(&mut feed_source, &config.feed_names);

    let digest = compose_digest(&feed_reports);
    debug!("Digest:\n{}", digest);

    let notifier = TelegramNotifier::new(
        client,
        config.telegram_bot_token.as_str(),
        config.telegram_chat_id.as_str(),
    );

    if deliver_digest(&notifier, &digest) {
        info!("Delivered mention digest for {} feeds", feed_reports.len());
    }

    Ok(())
}
