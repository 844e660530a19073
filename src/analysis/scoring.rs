use crate::log_debug;

use super::error::AnalysisError;
use super::lexicon::{contains_intensifier, count_keywords};
use super::types::{ClassificationResult, RawScores, Sentiment, SentimentScores};

const ENABLE_LOGS: bool = false;

const INTENSIFIER_FACTOR: f64 = 1.5;
const EXCLAMATION_WEIGHT: f64 = 0.5;
const POLAR_CONFIDENCE_BONUS: i32 = 20;
const NEUTRAL_CONFIDENCE_BONUS: i32 = 15;
const MAX_CONFIDENCE: i32 = 99;

/// Returned when no keyword matched at all.
const FALLBACK: ClassificationResult = ClassificationResult {
    sentiment: Sentiment::Neutral,
    scores: SentimentScores {
        positive: 33,
        neutral: 34,
        negative: 33,
    },
    confidence: 50,
};

/// Classify `text` as positive, neutral or negative.
///
/// Blank input is rejected; anything else always produces a result.
pub fn analyze(text: &str) -> Result<ClassificationResult, AnalysisError> {
    if text.trim().is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let raw = raw_scores(text);
    let result = classify(&raw);

    log_debug!(
        "analyzed {} chars: raw {:?} -> {} ({}%)",
        text.len(),
        raw,
        result.sentiment,
        result.confidence
    );

    Ok(result)
}

/// Keyword counts with the intensifier and exclamation boosts applied.
pub fn raw_scores(text: &str) -> RawScores {
    let lowered = text.to_lowercase();

    let mut positive = count_keywords(Sentiment::Positive, &lowered) as f64;
    let mut negative = count_keywords(Sentiment::Negative, &lowered) as f64;
    let neutral = count_keywords(Sentiment::Neutral, &lowered) as f64;

    let intensified = contains_intensifier(&lowered);
    if intensified {
        boost_leader(&mut positive, &mut negative, |score| score * INTENSIFIER_FACTOR);
    }

    let exclamations = text.chars().filter(|c| *c == '!').count();
    if exclamations > 0 {
        let bonus = exclamations as f64 * EXCLAMATION_WEIGHT;
        boost_leader(&mut positive, &mut negative, |score| score + bonus);
    }

    RawScores {
        positive,
        negative,
        neutral,
        exclamations,
        intensified,
    }
}

/// Applies `boost` to whichever polar score is strictly ahead; ties are left alone.
fn boost_leader(positive: &mut f64, negative: &mut f64, boost: impl Fn(f64) -> f64) {
    if *positive > *negative {
        *positive = boost(*positive);
    } else if *negative > *positive {
        *negative = boost(*negative);
    }
}

/// Normalize raw scores into percentages and pick the winning category.
pub fn classify(raw: &RawScores) -> ClassificationResult {
    let total = raw.total();
    if total == 0.0 {
        return FALLBACK;
    }

    let positive = percent(raw.positive, total);
    let negative = percent(raw.negative, total);
    // Remainder absorbs rounding and may dip below zero.
    let neutral = 100 - positive - negative;

    let (sentiment, confidence) = if positive > negative && positive > neutral {
        (Sentiment::Positive, positive + POLAR_CONFIDENCE_BONUS)
    } else if negative > positive && negative > neutral {
        (Sentiment::Negative, negative + POLAR_CONFIDENCE_BONUS)
    } else {
        let best = positive.max(negative).max(neutral);
        (Sentiment::Neutral, best + NEUTRAL_CONFIDENCE_BONUS)
    };

    ClassificationResult {
        sentiment,
        scores: SentimentScores {
            positive,
            neutral,
            negative,
        },
        confidence: confidence.clamp(0, MAX_CONFIDENCE) as u8,
    }
}

fn percent(score: f64, total: f64) -> i32 {
    (score / total * 100.0).round() as i32
}
