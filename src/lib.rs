// Export modules for library usage
pub mod analytics;
pub mod config;
pub mod core;
pub mod engine;
pub mod scoring;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use crate::core::errors::{Error, Result, ResultExt};
pub use crate::core::{
    DateRange, DifficultyBand, DifficultyBandStatistics, DifficultyLevel, OverallStatistics,
    PerformanceReport, ResponseCandidate, ResponseEvent, StatisticsFilter, TopicStatistics,
};

pub use crate::analytics::{
    difficulty_performance, overall_statistics, performance_report, topic_performance,
};
pub use crate::config::ScoringConfig;
pub use crate::engine::ResponseEngine;
pub use crate::scoring::{
    classify_difficulty, difficulty_band, performance_score, response_time_seconds,
    score_with_config,
};
pub use crate::store::{MemoryResponseStore, ResponseStore};
pub use crate::validation::validate;
