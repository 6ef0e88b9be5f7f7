use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::message::{Message, MessageValidationCode};

/// Audit record of one classified query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRecord {
    /// Unique query ID (UUIDv7 for time-sortability).
    pub id: Uuid,
    /// Original natural-language input.
    pub text: String,
    /// Classification result.
    pub message: Message,
    /// Outcome of validating `message`.
    pub code: MessageValidationCode,
    /// When the query was classified.
    pub created_at: DateTime<Utc>,
}

impl QueryRecord {
    pub fn new(text: impl Into<String>, message: Message, code: MessageValidationCode) -> Self {
        Self {
            id: Uuid::now_v7(),
            text: text.into(),
            message,
            code,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Intent, Slots, Topic};

    #[test]
    fn query_record_roundtrip() {
        let record = QueryRecord::new(
            "How many people were vaccinated yesterday?",
            Message::new(Topic::Vaccinations, Intent::default(), Slots::default()),
            MessageValidationCode::Unknown,
        );
        let json = serde_json::to_string(&record).unwrap();
        let back: QueryRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, record.id);
        assert_eq!(back.code, MessageValidationCode::Unknown);
        assert_eq!(back.message, record.message);
    }

    #[test]
    fn ids_are_unique() {
        let msg = Message::default();
        let a = QueryRecord::new("a", msg.clone(), MessageValidationCode::NoTopic);
        let b = QueryRecord::new("b", msg, MessageValidationCode::NoTopic);
        assert_ne!(a.id, b.id);
    }
}
