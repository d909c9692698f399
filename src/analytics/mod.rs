pub mod aggregation;
pub mod filter;

pub use aggregation::{
    difficulty_performance, overall_statistics, performance_report, topic_performance,
};
