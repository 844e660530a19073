pub mod analysis;
pub mod history;
pub mod samples;
pub mod session;
pub mod settings;
mod utils;

use anyhow::{Context, Result};
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

pub use analysis::{analyze, AnalysisError, ClassificationResult, Sentiment, SentimentScores};
pub use history::{AggregateStats, HistoryEntry, Tracker, TrackerSnapshot, HISTORY_CAPACITY};
pub use session::{AnalysisOutcome, SessionController};
pub use settings::{AnalysisSettings, SettingsStore};

const ENABLE_LOGS: bool = true;

const HELP: &str =
    "Type text to analyze. Commands: :sample, :stats, :latency <ms>, :reload, :quit";

/// Interactive line-based front end over a single analysis session.
pub fn run() -> Result<()> {
    let store = SettingsStore::new(settings::default_settings_path())?;
    let analysis_settings = store.analysis();

    let level = if analysis_settings.enable_logs {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Off
    };
    // RUST_LOG still takes precedence over the configured default.
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    log_info!(
        "MoodLens starting up (settings: {}, latency {} ms)",
        store.path().display(),
        analysis_settings.simulated_latency_ms
    );

    let controller = SessionController::new(analysis_settings);
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(interactive_loop(
        &store,
        controller,
        BufReader::new(io::stdin()),
        io::stdout(),
    ))
}

async fn interactive_loop<R, W>(
    store: &SettingsStore,
    controller: SessionController,
    mut reader: R,
    mut writer: W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(format!("{HELP}\n> ").as_bytes()).await?;
    writer.flush().await?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        // A bad line is reported and skipped; the session keeps going.
        let output = match std::str::from_utf8(&buf) {
            Ok(line) => match handle_line(store, &controller, line).await? {
                Some(output) => output,
                None => break,
            },
            Err(err) => {
                log_warn!("Skipping non UTF-8 input line: {}", err);
                format!("Input is not valid UTF-8: {err}")
            }
        };

        writer.write_all(format!("{output}\n> ").as_bytes()).await?;
        writer.flush().await?;
    }

    log_info!("MoodLens shutting down");
    Ok(())
}

/// Returns the text to show for `line`, or `None` when the user quits.
async fn handle_line(
    store: &SettingsStore,
    controller: &SessionController,
    line: &str,
) -> Result<Option<String>> {
    let command = line.trim();
    let output = match command {
        ":quit" | ":q" => return Ok(None),
        ":stats" => serde_json::to_string_pretty(&controller.snapshot().await)?,
        ":sample" => submit_and_render(controller, samples::random_sample()).await,
        ":reload" => match store.reload() {
            Ok(()) => {
                controller.set_latency_ms(store.analysis().simulated_latency_ms);
                format!("Settings reloaded from {}", store.path().display())
            }
            Err(err) => format!("{err:#}"),
        },
        _ if command.starts_with(":latency") => {
            match command[":latency".len()..].trim().parse::<u64>() {
                Ok(latency_ms) => set_latency(store, controller, latency_ms),
                Err(_) => "Usage: :latency <ms>".to_string(),
            }
        }
        _ => submit_and_render(controller, line).await,
    };
    Ok(Some(output))
}

fn set_latency(store: &SettingsStore, controller: &SessionController, latency_ms: u64) -> String {
    let settings = AnalysisSettings {
        simulated_latency_ms: latency_ms,
        ..store.analysis()
    };
    match store.update_analysis(settings) {
        Ok(()) => {
            controller.set_latency_ms(latency_ms);
            format!("Simulated latency set to {latency_ms} ms")
        }
        Err(err) => format!("{err:#}"),
    }
}

async fn submit_and_render(controller: &SessionController, text: &str) -> String {
    match controller.submit(text).await {
        Ok(outcome) => render_outcome(&outcome),
        Err(err) => err.to_string(),
    }
}

fn render_totals(stats: &AggregateStats) -> String {
    [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative]
        .iter()
        .map(|sentiment| format!("{} {}", stats.count(*sentiment), sentiment))
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_outcome(outcome: &AnalysisOutcome) -> String {
    let result = &outcome.result;

    let mut out = format!(
        "{} {}  Confidence: {}%\n  positive {}% | neutral {}% | negative {}%\n  totals: {}",
        result.sentiment.emoji(),
        result.sentiment.label(),
        result.confidence,
        result.scores.positive,
        result.scores.neutral,
        result.scores.negative,
        render_totals(&outcome.snapshot.stats),
    );

    for entry in &outcome.snapshot.history {
        out.push_str(&format!(
            "\n  [{}] {} ({}%) {}",
            entry.timestamp, entry.sentiment, entry.confidence, entry.text
        ));
    }

    out
}
