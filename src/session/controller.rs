use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use anyhow::Result;
use serde::Serialize;
use tokio::{sync::Mutex, time};

use crate::{
    analysis::{analyze, AnalysisError, ClassificationResult},
    history::{Tracker, TrackerSnapshot},
    log_info,
    settings::AnalysisSettings,
};

const ENABLE_LOGS: bool = true;

/// Everything the presentation layer needs after one submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutcome {
    pub text: String,
    pub result: ClassificationResult,
    pub snapshot: TrackerSnapshot,
}

/// Drives validate → analyze → record for one session.
///
/// Clones share the same tracker; its mutex serializes concurrent submissions.
#[derive(Clone)]
pub struct SessionController {
    tracker: Arc<Mutex<Tracker>>,
    latency_ms: Arc<AtomicU64>,
}

impl SessionController {
    pub fn new(settings: AnalysisSettings) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(Tracker::new())),
            latency_ms: Arc::new(AtomicU64::new(settings.simulated_latency_ms)),
        }
    }

    pub fn latency_ms(&self) -> u64 {
        self.latency_ms.load(Ordering::Relaxed)
    }

    /// Applies to submissions that start after the call.
    pub fn set_latency_ms(&self, latency_ms: u64) {
        self.latency_ms.store(latency_ms, Ordering::Relaxed);
    }

    pub async fn submit(&self, raw_text: &str) -> Result<AnalysisOutcome> {
        let text = raw_text.trim();
        if text.is_empty() {
            return Err(AnalysisError::EmptyInput.into());
        }

        let latency_ms = self.latency_ms();
        if latency_ms > 0 {
            time::sleep(Duration::from_millis(latency_ms)).await;
        }

        let result = analyze(text)?;

        let snapshot = {
            let mut tracker = self.tracker.lock().await;
            tracker.record(text, &result);
            tracker.snapshot()
        };

        log_info!(
            "Classified input as {} with {}% confidence",
            result.sentiment,
            result.confidence
        );

        Ok(AnalysisOutcome {
            text: text.to_string(),
            result,
            snapshot,
        })
    }

    pub async fn snapshot(&self) -> TrackerSnapshot {
        self.tracker.lock().await.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Sentiment;

    fn instant_settings() -> AnalysisSettings {
        AnalysisSettings {
            simulated_latency_ms: 0,
            ..AnalysisSettings::default()
        }
    }

    #[tokio::test]
    async fn test_submit_records_result() {
        let controller = SessionController::new(instant_settings());
        let outcome = controller.submit("  I love it  ").await.unwrap();

        assert_eq!(outcome.text, "I love it");
        assert_eq!(outcome.result.sentiment, Sentiment::Positive);
        assert_eq!(outcome.snapshot.stats.positive, 1);
        assert_eq!(outcome.snapshot.history[0].text, "I love it");
        assert_eq!(controller.snapshot().await, outcome.snapshot);
    }

    #[tokio::test]
    async fn test_blank_submission_rejected() {
        let controller = SessionController::new(instant_settings());
        let err = controller.submit(" \n ").await.unwrap_err();

        assert_eq!(
            err.downcast_ref::<AnalysisError>(),
            Some(&AnalysisError::EmptyInput)
        );
        assert_eq!(err.to_string(), "Please enter some text to analyze!");
        assert_eq!(controller.snapshot().await.stats.total(), 0);
    }

    #[tokio::test]
    async fn test_clones_share_tracker() {
        let controller = SessionController::new(instant_settings());
        let other = controller.clone();

        let (a, b) = tokio::join!(controller.submit("great"), other.submit("awful"));
        a.unwrap();
        b.unwrap();

        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.stats.positive, 1);
        assert_eq!(snapshot.stats.negative, 1);
        assert_eq!(snapshot.history.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_latency() {
        let controller = SessionController::new(AnalysisSettings::default());
        let started = time::Instant::now();
        controller.submit("fine").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(800));
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_change_reaches_clones() {
        let controller = SessionController::new(AnalysisSettings::default());
        let other = controller.clone();
        other.set_latency_ms(0);
        assert_eq!(controller.latency_ms(), 0);

        let started = time::Instant::now();
        controller.submit("fine").await.unwrap();
        assert_eq!(started.elapsed(), Duration::ZERO);
    }
}
