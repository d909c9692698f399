//! Domain validation for candidate response events.
//!
//! Checks run in a fixed order and short-circuit on the first failure;
//! each failure names the offending field and the violated constraint.
//! Validation never clamps or coerces a value into range.

use chrono::Utc;

use crate::core::errors::{Error, Result};
use crate::core::{ResponseCandidate, ResponseEvent};

// Pure function: Check that a unit-interval field is in [0, 1]
fn validate_unit_interval(value: f64, field: &'static str) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(Error::validation(field, "must be between 0.0 and 1.0"))
    }
}

// Pure function: Check that an identifier is present
fn validate_identifier(value: &str, field: &'static str) -> Result<()> {
    if value.is_empty() {
        Err(Error::validation(field, "is required"))
    } else {
        Ok(())
    }
}

/// Validate a candidate and convert it into an accepted [`ResponseEvent`].
///
/// An unset timestamp defaults to the current time. The candidate's
/// metadata passes through untouched.
pub fn validate(candidate: ResponseCandidate) -> Result<ResponseEvent> {
    let answer_index = u32::try_from(candidate.answer_index)
        .map_err(|_| Error::validation("answer_index", "must be a non-negative integer"))?;

    let response_time_ms = u64::try_from(candidate.response_time_ms)
        .map_err(|_| Error::validation("response_time_ms", "must be a non-negative integer"))?;

    let difficulty = validate_unit_interval(candidate.difficulty, "difficulty")?;
    let student_ability = validate_unit_interval(candidate.student_ability, "student_ability")?;

    if candidate.topic.trim().is_empty() {
        return Err(Error::validation("topic", "must not be blank"));
    }

    if candidate.question_number < 1 {
        return Err(Error::validation(
            "question_number",
            "must be greater than or equal to 1",
        ));
    }

    validate_identifier(&candidate.session_id, "session_id")?;
    validate_identifier(&candidate.question_id, "question_id")?;

    Ok(ResponseEvent {
        session_id: candidate.session_id,
        question_id: candidate.question_id,
        answer_index,
        correct: candidate.correct,
        response_time_ms,
        timestamp: candidate.timestamp.unwrap_or_else(Utc::now),
        question_number: candidate.question_number,
        difficulty,
        topic: candidate.topic,
        student_ability,
        metadata: candidate.metadata,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn candidate() -> ResponseCandidate {
        ResponseCandidate::new("session-1", "question-1", 1, 2, true, 4_500, 0.5, "Algebra", 0.6)
    }

    fn rejected_field(candidate: ResponseCandidate) -> &'static str {
        match validate(candidate).unwrap_err() {
            Error::Validation { field, .. } => field,
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn accepts_a_valid_candidate() {
        let event = validate(candidate()).unwrap();
        assert_eq!(event.session_id, "session-1");
        assert_eq!(event.answer_index, 2);
        assert_eq!(event.response_time_ms, 4_500);
        assert_eq!(event.topic, "Algebra");
    }

    #[test]
    fn rejects_negative_answer_index() {
        let mut c = candidate();
        c.answer_index = -1;
        assert_eq!(rejected_field(c), "answer_index");
    }

    #[test]
    fn rejects_negative_response_time() {
        let mut c = candidate();
        c.response_time_ms = -5;
        assert_eq!(rejected_field(c), "response_time_ms");
    }

    #[test]
    fn rejects_out_of_range_difficulty() {
        let mut c = candidate();
        c.difficulty = 1.2;
        assert_eq!(rejected_field(c), "difficulty");

        let mut c = candidate();
        c.difficulty = -0.1;
        assert_eq!(rejected_field(c), "difficulty");
    }

    #[test]
    fn rejects_out_of_range_student_ability() {
        let mut c = candidate();
        c.student_ability = 1.01;
        assert_eq!(rejected_field(c), "student_ability");
    }

    #[test]
    fn rejects_blank_topic() {
        let mut c = candidate();
        c.topic = "   ".to_string();
        assert_eq!(rejected_field(c), "topic");
    }

    #[test]
    fn rejects_zero_question_number() {
        let mut c = candidate();
        c.question_number = 0;
        assert_eq!(rejected_field(c), "question_number");
    }

    #[test]
    fn rejects_missing_identifiers() {
        let mut c = candidate();
        c.session_id = String::new();
        assert_eq!(rejected_field(c), "session_id");

        let mut c = candidate();
        c.question_id = String::new();
        assert_eq!(rejected_field(c), "question_id");
    }

    #[test]
    fn short_circuits_on_the_first_failing_field() {
        // Both answer_index and topic are invalid; answer_index is
        // checked first.
        let mut c = candidate();
        c.answer_index = -3;
        c.topic = String::new();
        assert_eq!(rejected_field(c), "answer_index");
    }

    #[test]
    fn boundary_values_are_accepted() {
        let mut c = candidate();
        c.answer_index = 0;
        c.response_time_ms = 0;
        c.difficulty = 1.0;
        c.student_ability = 0.0;
        c.question_number = 1;
        assert!(validate(c).is_ok());
    }

    #[test]
    fn explicit_timestamp_is_preserved() {
        let at = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
        let event = validate(candidate().with_timestamp(at)).unwrap();
        assert_eq!(event.timestamp, at);
    }

    #[test]
    fn metadata_passes_through_untouched() {
        let c = candidate().with_metadata("device", serde_json::json!("tablet"));
        let event = validate(c).unwrap();
        assert_eq!(event.metadata["device"], serde_json::json!("tablet"));
    }
}
