//! Aggregation of response events into summary statistics.
//!
//! Each operation is a single streaming pass over an already-filtered
//! event sequence; the store applies the filter, these functions only
//! reduce. Results are deterministic and independent of event order.
//! An empty input produces zero-valued statistics, never NaN, since
//! dashboard consumers render the fields directly.

use std::collections::HashMap;

use im::Vector;

use crate::core::{
    DifficultyBand, DifficultyBandStatistics, OverallStatistics, PerformanceReport, ResponseEvent,
    TopicStatistics,
};
use crate::scoring::difficulty_band;

/// Running sums for one group of responses
#[derive(Debug, Clone, Copy, Default)]
struct StatsAccumulator {
    count: usize,
    correct: usize,
    response_time_sum: f64,
    difficulty_sum: f64,
    ability_sum: f64,
}

impl StatsAccumulator {
    fn observe(&mut self, event: &ResponseEvent) {
        self.count += 1;
        if event.correct {
            self.correct += 1;
        }
        self.response_time_sum += event.response_time_ms as f64;
        self.difficulty_sum += event.difficulty;
        self.ability_sum += event.student_ability;
    }

    fn mean(&self, sum: f64) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        sum / self.count as f64
    }

    fn accuracy_rate(&self) -> f64 {
        self.mean(self.correct as f64)
    }
}

/// Compute the overall summary across all supplied events
pub fn overall_statistics(events: &[ResponseEvent]) -> OverallStatistics {
    let mut acc = StatsAccumulator::default();
    for event in events {
        acc.observe(event);
    }

    OverallStatistics {
        total_responses: acc.count,
        correct_responses: acc.correct,
        average_response_time: acc.mean(acc.response_time_sum),
        average_difficulty: acc.mean(acc.difficulty_sum),
        average_student_ability: acc.mean(acc.ability_sum),
        accuracy_rate: acc.accuracy_rate(),
    }
}

/// Compute one summary per distinct topic, sorted by accuracy rate
/// descending with topic name ascending as the tie-break.
///
/// Topics group by exact string; "Algebra" and "algebra" are distinct
/// groups.
pub fn topic_performance(events: &[ResponseEvent]) -> Vec<TopicStatistics> {
    let groups: HashMap<&str, StatsAccumulator> =
        events.iter().fold(HashMap::new(), |mut acc, event| {
            acc.entry(event.topic.as_str()).or_default().observe(event);
            acc
        });

    let mut rows: Vec<TopicStatistics> = groups
        .into_iter()
        .map(|(topic, acc)| TopicStatistics {
            topic: topic.to_string(),
            total_responses: acc.count,
            correct_responses: acc.correct,
            average_response_time: acc.mean(acc.response_time_sum),
            average_difficulty: acc.mean(acc.difficulty_sum),
            accuracy_rate: acc.accuracy_rate(),
        })
        .collect();

    rows.sort_by(|a, b| {
        b.accuracy_rate
            .partial_cmp(&a.accuracy_rate)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.topic.cmp(&b.topic))
    });
    rows
}

/// Compute one summary per difficulty band over the boundaries
/// [0, 0.3, 0.7, 1.0], upper-inclusive, plus the out-of-range `Other`
/// catch-all.
///
/// Every band appears in the output in fixed order (Easy, Medium,
/// Hard, Other) so report rows stay stable; empty bands carry zeroed
/// statistics.
pub fn difficulty_performance(events: &[ResponseEvent]) -> Vec<DifficultyBandStatistics> {
    let mut accumulators: HashMap<DifficultyBand, StatsAccumulator> = HashMap::new();
    for event in events {
        accumulators
            .entry(difficulty_band(event.difficulty))
            .or_default()
            .observe(event);
    }

    DifficultyBand::ALL
        .iter()
        .map(|band| {
            let acc = accumulators.get(band).copied().unwrap_or_default();
            DifficultyBandStatistics {
                band: *band,
                total_responses: acc.count,
                correct_responses: acc.correct,
                average_response_time: acc.mean(acc.response_time_sum),
                accuracy_rate: acc.accuracy_rate(),
            }
        })
        .collect()
}

/// Compute all three views from one snapshot
pub fn performance_report(events: &[ResponseEvent]) -> PerformanceReport {
    PerformanceReport {
        overall: overall_statistics(events),
        by_topic: Vector::from(topic_performance(events)),
        by_difficulty: Vector::from(difficulty_performance(events)),
    }
}
