//! Per-response performance scoring.
//!
//! The score is a pure function of the event: correctness dominates,
//! speed contributes with linear decay, and correctly answering a
//! harder question earns a small difficulty-scaled bonus. The raw sum
//! can reach 1.2 (instant correct answer at difficulty 1.0); the final
//! clamp to 1.0 is part of the scoring contract.

use crate::config::ScoringConfig;
use crate::core::ResponseEvent;

/// Compute the performance score in [0, 1] under the given weights
pub fn score_with_config(event: &ResponseEvent, config: &ScoringConfig) -> f64 {
    let time_score =
        (1.0 - event.response_time_ms as f64 / config.time_ceiling_ms as f64).max(0.0);
    let correctness_score = if event.correct { 1.0 } else { 0.0 };
    let difficulty_bonus = if event.correct {
        event.difficulty * config.difficulty_bonus_weight
    } else {
        0.0
    };

    let raw_score = time_score * config.time_weight
        + correctness_score * config.correctness_weight
        + difficulty_bonus;

    raw_score.min(1.0)
}

/// Compute the performance score in [0, 1] under the canonical weights
pub fn performance_score(event: &ResponseEvent) -> f64 {
    score_with_config(event, &ScoringConfig::default())
}

/// Response time in seconds, rounded to 2 decimal places
pub fn response_time_seconds(event: &ResponseEvent) -> f64 {
    (event.response_time_ms as f64 / 10.0).round() / 100.0
}
