//! Filter matching semantics shared by the store and the aggregator.

use crate::core::{ResponseEvent, StatisticsFilter};

impl StatisticsFilter {
    /// Whether an event passes every restriction this filter carries.
    ///
    /// Identifier fields are exact-match, the topic is a
    /// case-insensitive substring match, and the date range bounds the
    /// timestamp inclusively on both ends. An absent field always
    /// passes.
    pub fn matches(&self, event: &ResponseEvent) -> bool {
        if let Some(session_id) = &self.session_id {
            if event.session_id != *session_id {
                return false;
            }
        }

        if let Some(question_id) = &self.question_id {
            if event.question_id != *question_id {
                return false;
            }
        }

        if let Some(topic) = &self.topic {
            if !event
                .topic
                .to_lowercase()
                .contains(&topic.to_lowercase())
            {
                return false;
            }
        }

        if let Some(range) = &self.date_range {
            if event.timestamp < range.start || event.timestamp > range.end {
                return false;
            }
        }

        true
    }
}
