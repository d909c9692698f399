use serde::{Deserialize, Serialize};

use crate::core::errors::{Error, Result};

/// Scoring configuration.
///
/// The serde defaults reproduce the canonical formula exactly: speed
/// contributes up to 0.3 with linear decay to zero at 30 seconds,
/// correctness contributes 0.7, and a correct answer earns a bonus of
/// up to 0.2 scaled by question difficulty, with the final score
/// clamped to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Weight for the speed factor (0.0-1.0)
    #[serde(default = "default_time_weight")]
    pub time_weight: f64,

    /// Weight for the correctness factor (0.0-1.0)
    #[serde(default = "default_correctness_weight")]
    pub correctness_weight: f64,

    /// Maximum difficulty bonus for a correct answer (0.0-1.0)
    #[serde(default = "default_difficulty_bonus_weight")]
    pub difficulty_bonus_weight: f64,

    /// Response time at which the speed factor reaches zero
    #[serde(default = "default_time_ceiling_ms")]
    pub time_ceiling_ms: u64,
}

fn default_time_weight() -> f64 {
    0.3
}

fn default_correctness_weight() -> f64 {
    0.7
}

fn default_difficulty_bonus_weight() -> f64 {
    0.2
}

fn default_time_ceiling_ms() -> u64 {
    30_000
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            time_weight: default_time_weight(),
            correctness_weight: default_correctness_weight(),
            difficulty_bonus_weight: default_difficulty_bonus_weight(),
            time_ceiling_ms: default_time_ceiling_ms(),
        }
    }
}

impl ScoringConfig {
    // Pure function: Check if a weight is in valid range
    fn is_valid_weight(weight: f64) -> bool {
        (0.0..=1.0).contains(&weight)
    }

    // Pure function: Validate a single weight with name
    fn validate_weight(weight: f64, name: &str) -> std::result::Result<(), String> {
        if Self::is_valid_weight(weight) {
            Ok(())
        } else {
            Err(format!("{} weight must be between 0.0 and 1.0", name))
        }
    }

    // Pure function: Validate that the base weights sum to 1.0, so an
    // instant correct answer on a zero-difficulty question scores 1.0
    fn validate_base_weights_sum(time: f64, correctness: f64) -> std::result::Result<(), String> {
        let sum = time + correctness;
        if (sum - 1.0).abs() > 0.001 {
            Err(format!(
                "Base scoring weights (time, correctness) must sum to 1.0, but sum to {:.3}",
                sum
            ))
        } else {
            Ok(())
        }
    }

    fn validate_time_ceiling(ceiling_ms: u64) -> std::result::Result<(), String> {
        if ceiling_ms == 0 {
            Err("time ceiling must be greater than 0 ms".to_string())
        } else {
            Ok(())
        }
    }

    /// Validate the full configuration
    pub fn validate(&self) -> Result<()> {
        Self::validate_weight(self.time_weight, "time")
            .and_then(|_| Self::validate_weight(self.correctness_weight, "correctness"))
            .and_then(|_| {
                Self::validate_weight(self.difficulty_bonus_weight, "difficulty bonus")
            })
            .and_then(|_| {
                Self::validate_base_weights_sum(self.time_weight, self.correctness_weight)
            })
            .and_then(|_| Self::validate_time_ceiling(self.time_ceiling_ms))
            .map_err(Error::Configuration)
    }
}
