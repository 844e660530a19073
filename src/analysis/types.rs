use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    /// Upper-case label shown next to the result.
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "POSITIVE",
            Sentiment::Neutral => "NEUTRAL",
            Sentiment::Negative => "NEGATIVE",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Sentiment::Positive => "😊",
            Sentiment::Neutral => "😐",
            Sentiment::Negative => "😞",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Percentage split across the three categories.
///
/// `neutral` is the remainder `100 - positive - negative`, so the three always
/// sum to 100 even when rounding pushes `neutral` below zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SentimentScores {
    pub positive: i32,
    pub neutral: i32,
    pub negative: i32,
}

impl SentimentScores {
    pub fn total(&self) -> i32 {
        self.positive + self.neutral + self.negative
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub sentiment: Sentiment,
    pub scores: SentimentScores,
    /// Heuristic certainty in `0..=99`.
    pub confidence: u8,
}

/// Keyword scores after intensifier and exclamation adjustments, before
/// they are normalized into percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawScores {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub exclamations: usize,
    pub intensified: bool,
}

impl RawScores {
    pub fn total(&self) -> f64 {
        self.positive + self.negative + self.neutral
    }
}
