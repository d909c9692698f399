pub mod calculator;
pub mod classifier;

pub use calculator::{performance_score, response_time_seconds, score_with_config};
pub use classifier::{classify_difficulty, difficulty_band};
