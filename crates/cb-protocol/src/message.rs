use serde::{Deserialize, Serialize};

use crate::intent::Intent;
use crate::slots::Slots;
use crate::topic::Topic;

/// A classified query: topic, intent and slots.
///
/// Immutable once built. Fields are optional because messages can also
/// arrive over the wire, where a producer may have omitted one; validation
/// reports that as a server-side error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    topic: Option<Topic>,
    #[serde(default)]
    intent: Option<Intent>,
    #[serde(default)]
    slots: Option<Slots>,
}

impl Message {
    pub fn new(topic: Topic, intent: Intent, slots: Slots) -> Self {
        Self {
            topic: Some(topic),
            intent: Some(intent),
            slots: Some(slots),
        }
    }

    /// Build a message that may be missing parts.
    pub fn from_parts(topic: Option<Topic>, intent: Option<Intent>, slots: Option<Slots>) -> Self {
        Self {
            topic,
            intent,
            slots,
        }
    }

    pub fn topic(&self) -> Option<Topic> {
        self.topic
    }

    pub fn intent(&self) -> Option<&Intent> {
        self.intent.as_ref()
    }

    pub fn slots(&self) -> Option<&Slots> {
        self.slots.as_ref()
    }
}

/// Which group a validation code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationCategory {
    /// The message can be executed.
    Valid,
    /// Underspecified or ambiguous input; ask the user to clarify.
    UserError,
    /// The classifier produced something it never should; a defect.
    ServerError,
}

/// Result of validating a [`Message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageValidationCode {
    Valid,

    NoTimeframe,
    AmbiguousTopic,
    Unknown,

    NoTopic,
    NoIntent,
    NoSlots,
    IntentMismatch,
    UnsupportedAction,
}

impl MessageValidationCode {
    pub const VALID_CODES: &'static [Self] = &[Self::Valid];

    pub const USER_QUERY_ERROR_CODES: &'static [Self] =
        &[Self::NoTimeframe, Self::AmbiguousTopic, Self::Unknown];

    pub const SERVER_SIDE_ERROR_CODES: &'static [Self] = &[
        Self::NoTopic,
        Self::NoIntent,
        Self::NoSlots,
        Self::IntentMismatch,
        Self::UnsupportedAction,
    ];

    pub fn category(&self) -> ValidationCategory {
        match self {
            Self::Valid => ValidationCategory::Valid,
            Self::NoTimeframe | Self::AmbiguousTopic | Self::Unknown => {
                ValidationCategory::UserError
            }
            Self::NoTopic
            | Self::NoIntent
            | Self::NoSlots
            | Self::IntentMismatch
            | Self::UnsupportedAction => ValidationCategory::ServerError,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.category() == ValidationCategory::Valid
    }

    pub fn is_user_error(&self) -> bool {
        self.category() == ValidationCategory::UserError
    }

    pub fn is_server_error(&self) -> bool {
        self.category() == ValidationCategory::ServerError
    }

    /// Stable numeric code, as stored in query audit records.
    pub fn code(&self) -> u8 {
        match self {
            Self::Valid => 1,
            Self::NoTimeframe => 3,
            Self::AmbiguousTopic => 4,
            Self::Unknown => 5,
            Self::NoTopic => 10,
            Self::NoIntent => 11,
            Self::NoSlots => 12,
            Self::IntentMismatch => 13,
            Self::UnsupportedAction => 14,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::NoTimeframe => "no_timeframe",
            Self::AmbiguousTopic => "ambiguous_topic",
            Self::Unknown => "unknown",
            Self::NoTopic => "no_topic",
            Self::NoIntent => "no_intent",
            Self::NoSlots => "no_slots",
            Self::IntentMismatch => "intent_mismatch",
            Self::UnsupportedAction => "unsupported_action",
        }
    }
}

impl std::fmt::Display for MessageValidationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_groups_are_disjoint() {
        for code in MessageValidationCode::VALID_CODES {
            assert!(code.is_valid());
        }
        for code in MessageValidationCode::USER_QUERY_ERROR_CODES {
            assert!(code.is_user_error());
            assert!(!code.is_server_error());
        }
        for code in MessageValidationCode::SERVER_SIDE_ERROR_CODES {
            assert!(code.is_server_error());
            assert!(!code.is_user_error());
        }
    }

    #[test]
    fn numeric_codes() {
        assert_eq!(MessageValidationCode::Valid.code(), 1);
        assert_eq!(MessageValidationCode::NoTimeframe.code(), 3);
        assert_eq!(MessageValidationCode::UnsupportedAction.code(), 14);
    }

    #[test]
    fn validation_code_serialization() {
        let json = serde_json::to_string(&MessageValidationCode::IntentMismatch).unwrap();
        assert_eq!(json, r#""intent_mismatch""#);
        assert_eq!(MessageValidationCode::IntentMismatch.to_string(), "intent_mismatch");
    }

    #[test]
    fn message_missing_fields_deserialize_as_none() {
        let msg: Message = serde_json::from_str(r#"{"topic": "cases"}"#).unwrap();
        assert_eq!(msg.topic(), Some(Topic::Cases));
        assert!(msg.intent().is_none());
        assert!(msg.slots().is_none());
    }

    #[test]
    fn message_new_populates_all_parts() {
        let msg = Message::new(Topic::Vaccinations, Intent::default(), Slots::default());
        assert_eq!(msg.topic(), Some(Topic::Vaccinations));
        assert!(msg.intent().is_some());
        assert!(msg.slots().is_some());
    }
}
