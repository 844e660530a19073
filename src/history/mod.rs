mod types;

pub use types::{AggregateStats, HistoryEntry, TrackerSnapshot};

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use uuid::Uuid;

use crate::analysis::ClassificationResult;
use crate::log_debug;

const ENABLE_LOGS: bool = true;

pub const HISTORY_CAPACITY: usize = 10;

/// Per-session tally of classifications plus the most recent analyses.
///
/// Starts empty with all counts at zero. Callers own one instance per session
/// and must serialize calls to [`Tracker::record`].
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    stats: AggregateStats,
    history: VecDeque<HistoryEntry>,
}

impl Tracker {
    pub fn new() -> Self {
        Self {
            stats: AggregateStats::default(),
            history: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    /// Count `result` and push it to the front of the history, stamped with
    /// the current local time.
    pub fn record(&mut self, text: &str, result: &ClassificationResult) {
        self.record_at(text, result, Local::now());
    }

    pub fn record_at(&mut self, text: &str, result: &ClassificationResult, at: DateTime<Local>) {
        self.stats.increment(result.sentiment);

        self.history.push_front(HistoryEntry {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            sentiment: result.sentiment,
            confidence: result.confidence,
            timestamp: at.format("%H:%M").to_string(),
        });

        if self.history.len() > HISTORY_CAPACITY {
            self.history.pop_back();
        }

        log_debug!(
            "recorded {} ({}%), {} analyses so far",
            result.sentiment,
            result.confidence,
            self.stats.total()
        );
    }

    pub fn stats(&self) -> AggregateStats {
        self.stats
    }

    /// Newest first.
    pub fn history(&self) -> &VecDeque<HistoryEntry> {
        &self.history
    }

    pub fn snapshot(&self) -> TrackerSnapshot {
        TrackerSnapshot {
            stats: self.stats,
            history: self.history.iter().cloned().collect(),
        }
    }
}
