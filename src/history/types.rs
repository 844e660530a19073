use serde::{Deserialize, Serialize};

use crate::analysis::Sentiment;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    /// Input as submitted, original casing kept.
    pub text: String,
    pub sentiment: Sentiment,
    pub confidence: u8,
    /// Local time of day, `HH:MM`.
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub positive: u64,
    pub neutral: u64,
    pub negative: u64,
}

impl AggregateStats {
    pub fn count(&self, sentiment: Sentiment) -> u64 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    pub fn total(&self) -> u64 {
        self.positive + self.neutral + self.negative
    }

    pub(crate) fn increment(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrackerSnapshot {
    pub stats: AggregateStats,
    /// Newest first.
    pub history: Vec<HistoryEntry>,
}
