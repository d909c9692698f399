//! Facade wiring validation, the store, and the aggregations together.

use log::debug;

use crate::analytics;
use crate::config::ScoringConfig;
use crate::core::errors::Result;
use crate::core::{
    DifficultyBandStatistics, OverallStatistics, PerformanceReport, ResponseCandidate,
    ResponseEvent, StatisticsFilter, TopicStatistics,
};
use crate::scoring;
use crate::store::ResponseStore;
use crate::validation;

/// Response scoring and analytics engine over an external store.
///
/// Holds no mutable state of its own; every operation is a pure
/// computation over data in hand plus at most one store call, so
/// concurrent calls need no synchronization here.
pub struct ResponseEngine<S: ResponseStore> {
    store: S,
    config: ScoringConfig,
}

impl<S: ResponseStore> ResponseEngine<S> {
    /// Engine with the canonical scoring weights
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: ScoringConfig::default(),
        }
    }

    /// Engine with custom scoring weights, validated up front
    pub fn with_config(store: S, config: ScoringConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { store, config })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Validate a candidate and append the accepted event to the store.
    ///
    /// Validation failures surface before any store interaction and are
    /// terminal for this candidate only; storage failures propagate
    /// unchanged, with no retry.
    pub fn record(&self, candidate: ResponseCandidate) -> Result<ResponseEvent> {
        let event = validation::validate(candidate)?;
        debug!(
            "recording response: session {} question {} (q#{})",
            event.session_id, event.question_id, event.question_number
        );
        self.store.append(event.clone())?;
        Ok(event)
    }

    /// Performance score for an event under this engine's weights
    pub fn score(&self, event: &ResponseEvent) -> f64 {
        scoring::score_with_config(event, &self.config)
    }

    /// Overall summary across all matching responses
    pub fn overall_statistics(&self, filter: &StatisticsFilter) -> Result<OverallStatistics> {
        let events = self.store.fetch_matching(filter)?;
        debug!("aggregating overall statistics over {} responses", events.len());
        Ok(analytics::overall_statistics(&events))
    }

    /// Per-topic summaries, accuracy descending
    pub fn topic_performance(&self, filter: &StatisticsFilter) -> Result<Vec<TopicStatistics>> {
        let events = self.store.fetch_matching(filter)?;
        debug!("aggregating topic performance over {} responses", events.len());
        Ok(analytics::topic_performance(&events))
    }

    /// Per-difficulty-band summaries in fixed band order
    pub fn difficulty_performance(
        &self,
        filter: &StatisticsFilter,
    ) -> Result<Vec<DifficultyBandStatistics>> {
        let events = self.store.fetch_matching(filter)?;
        debug!(
            "aggregating difficulty performance over {} responses",
            events.len()
        );
        Ok(analytics::difficulty_performance(&events))
    }

    /// All three views from a single snapshot
    pub fn performance_report(&self, filter: &StatisticsFilter) -> Result<PerformanceReport> {
        let events = self.store.fetch_matching(filter)?;
        debug!("building performance report over {} responses", events.len());
        Ok(analytics::performance_report(&events))
    }
}
