pub mod candidate_extractor;
pub use candidate_extractor::{CandidateExtractor, Candidates};

pub mod error;
pub use error::Error;

pub mod feed_report;
pub use feed_report::{compose_digest, FeedReport};

pub mod mention_aggregator;
pub use mention_aggregator::{MentionAggregator, MentionReport};

pub mod mention_pipeline;
pub use mention_pipeline::{MentionPipeline, MentionPipelineConfig};

pub mod ticker_validator;
pub use ticker_validator::TickerValidator;
