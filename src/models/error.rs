use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Parser Error: {0}")]
    ParserError(String),
    #[error("HTTP Error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("CSV Error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Auth Error: {0}")]
    AuthError(String),
    #[error("Feed Error: {0}")]
    FeedError(String),
    #[error("Notification Error: {0}")]
    NotificationError(String),
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Error {
        Error::ParserError(err.to_string())
    }
}
