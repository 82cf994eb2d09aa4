use crate::types::FeedItem;
use chrono::{DateTime, NaiveDate};

/// A feed submission reduced to the fields needed for mention counting.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub title: String,
    pub body: String,
    /// Creation time, in seconds since the Unix epoch (UTC).
    pub created_utc: f64,
}

/// Returns `true` if `created_utc` falls on the UTC calendar `day`.
pub fn is_created_on(created_utc: f64, day: NaiveDate) -> bool {
    DateTime::from_timestamp(created_utc.trunc() as i64, 0)
        .map(|created| created.date_naive() == day)
        .unwrap_or(false)
}

/// Keeps the submissions created on `day` and joins each one's title and body.
pub fn collect_items_created_on(submissions: &[Submission], day: NaiveDate) -> Vec<FeedItem> {
    submissions
        .iter()
        .filter(|submission| is_created_on(submission.created_utc, day))
        .map(|submission| format!("{} {}", submission.title, submission.body))
        .collect()
}
