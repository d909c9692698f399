pub mod errors;
pub mod types;

pub use types::{
    DateRange, DifficultyBand, DifficultyBandStatistics, DifficultyLevel, OverallStatistics,
    PerformanceReport, ResponseCandidate, ResponseEvent, StatisticsFilter, TopicStatistics,
};
