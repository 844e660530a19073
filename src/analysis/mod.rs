pub mod error;
pub mod lexicon;
pub mod scoring;
pub mod types;

pub use error::AnalysisError;
pub use scoring::{analyze, classify, raw_scores};
pub use types::{ClassificationResult, RawScores, Sentiment, SentimentScores};
