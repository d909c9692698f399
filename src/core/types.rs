//! Common type definitions used across the codebase

use chrono::{DateTime, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One recorded answer to one question within one assessment session.
///
/// Immutable once created; derived values (performance score, difficulty
/// level, response time in seconds) are recomputed on every read rather
/// than stored on the event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEvent {
    pub session_id: String,
    pub question_id: String,
    /// Index of the option the student chose.
    pub answer_index: u32,
    /// Supplied by the caller; never derived from `answer_index` here.
    pub correct: bool,
    pub response_time_ms: u64,
    pub timestamp: DateTime<Utc>,
    /// Ordinal position of the question within the session, starting at 1.
    pub question_number: u32,
    /// Question difficulty at answer time, in [0, 1].
    pub difficulty: f64,
    pub topic: String,
    /// Externally supplied ability snapshot in [0, 1]. The engine records
    /// it and averages it; the update rule lives outside this crate.
    pub student_ability: f64,
    /// Free-form auxiliary fields (device, browser, ...). Never inspected
    /// by scoring or aggregation logic.
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

/// A candidate response as supplied by the caller, before validation.
///
/// Integer fields whose domain constraint is "non-negative" are signed
/// here so that out-of-range input is representable and can be rejected
/// with a field-level error instead of being unrepresentable at the
/// boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseCandidate {
    pub session_id: String,
    pub question_id: String,
    pub answer_index: i64,
    pub correct: bool,
    pub response_time_ms: i64,
    /// Defaults to the moment of validation when unset.
    pub timestamp: Option<DateTime<Utc>>,
    pub question_number: u32,
    pub difficulty: f64,
    pub topic: String,
    pub student_ability: f64,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl ResponseCandidate {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        session_id: impl Into<String>,
        question_id: impl Into<String>,
        question_number: u32,
        answer_index: i64,
        correct: bool,
        response_time_ms: i64,
        difficulty: f64,
        topic: impl Into<String>,
        student_ability: f64,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            question_id: question_id.into(),
            answer_index,
            correct,
            response_time_ms,
            timestamp: None,
            question_number,
            difficulty,
            topic: topic.into(),
            student_ability,
            metadata: HashMap::new(),
        }
    }

    /// Set an explicit timestamp instead of the validation-time default
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Attach one auxiliary metadata field
    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: serde_json::Value,
    ) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

/// Categorical difficulty label over the continuous [0, 1] scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DifficultyLevel {
    Easy,   // difficulty <= 0.3
    Medium, // 0.3 < difficulty <= 0.7
    Hard,   // difficulty > 0.7
}

impl DifficultyLevel {
    /// Get the display name for this level
    pub fn display_name(&self) -> &str {
        match self {
            DifficultyLevel::Easy => "Easy",
            DifficultyLevel::Medium => "Medium",
            DifficultyLevel::Hard => "Hard",
        }
    }
}

/// Reporting band for difficulty bucketing. The three in-range bands
/// coincide with [`DifficultyLevel`]; `Other` catches values outside
/// [0, 1], which validation excludes but the bucketing still handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DifficultyBand {
    Easy,
    Medium,
    Hard,
    Other,
}

impl DifficultyBand {
    /// Fixed reporting order; every band appears in every report
    pub const ALL: [DifficultyBand; 4] = [
        DifficultyBand::Easy,
        DifficultyBand::Medium,
        DifficultyBand::Hard,
        DifficultyBand::Other,
    ];

    /// Get the display name for this band
    pub fn display_name(&self) -> &str {
        match self {
            DifficultyBand::Easy => "Easy",
            DifficultyBand::Medium => "Medium",
            DifficultyBand::Hard => "Hard",
            DifficultyBand::Other => "Other",
        }
    }
}

/// Inclusive bounds on event timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }
}

/// Optional constraints narrowing which responses an aggregation
/// considers. An absent field imposes no restriction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsFilter {
    /// Exact match on `session_id`
    pub session_id: Option<String>,
    /// Exact match on `question_id`
    pub question_id: Option<String>,
    /// Case-insensitive substring match on `topic`
    pub topic: Option<String>,
    /// Inclusive bounds on `timestamp`
    pub date_range: Option<DateRange>,
}

impl StatisticsFilter {
    /// Filter with no restrictions; every event matches
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn with_question(mut self, question_id: impl Into<String>) -> Self {
        self.question_id = Some(question_id.into());
        self
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }
}

/// Summary across all responses matching a filter.
///
/// A zero-event summary reports 0 for every count, average, and rate;
/// consumers render these values directly, so none of them is ever NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallStatistics {
    pub total_responses: usize,
    pub correct_responses: usize,
    pub average_response_time: f64,
    pub average_difficulty: f64,
    pub average_student_ability: f64,
    pub accuracy_rate: f64,
}

/// Per-topic summary. Topics group by exact string; no case
/// normalization. Student ability is omitted since it is only
/// meaningful in the overall view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicStatistics {
    pub topic: String,
    pub total_responses: usize,
    pub correct_responses: usize,
    pub average_response_time: f64,
    pub average_difficulty: f64,
    pub accuracy_rate: f64,
}

/// Per-difficulty-band summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyBandStatistics {
    pub band: DifficultyBand,
    pub total_responses: usize,
    pub correct_responses: usize,
    pub average_response_time: f64,
    pub accuracy_rate: f64,
}

/// All three aggregation views computed from one snapshot, so the
/// sections of a dashboard agree with each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub overall: OverallStatistics,
    pub by_topic: Vector<TopicStatistics>,
    pub by_difficulty: Vector<DifficultyBandStatistics>,
}
