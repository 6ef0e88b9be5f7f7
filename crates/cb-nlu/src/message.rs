//! Message assembly, validation and downstream defaults.

use std::sync::Arc;

use async_trait::async_trait;
use cb_protocol::{
    CalculationType, DateSlot, Intent, MeasurementType, Message, MessageValidationCode, Slots,
    Topic, ValueType, location,
};
use cb_treequery::{Sentence, TreeResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::NluResult;
use crate::intent::IntentRecognizer;
use crate::lexicon::Lexicon;
use crate::patterns::PatternTable;
use crate::slots::SlotFiller;
use crate::topic::TopicRecognizer;

/// Location used when a query names none.
pub const DEFAULT_LOCATION: &str = location::WORLD;

// ── Assembly ──────────────────────────────────────────────────

/// Runs the topic, intent and slot recognizers over one sentence.
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    topics: TopicRecognizer,
    intents: IntentRecognizer,
    slots: SlotFiller,
}

impl MessageBuilder {
    /// Compile the pattern tables for `lexicon`. Fails only on a broken
    /// pattern definition.
    pub fn new(lexicon: &Lexicon) -> TreeResult<Self> {
        let patterns = Arc::new(PatternTable::new(lexicon)?);
        Ok(Self {
            topics: TopicRecognizer::new(Arc::clone(&patterns)),
            intents: IntentRecognizer::new(patterns),
            slots: SlotFiller::new(),
        })
    }

    pub fn create_message(&self, sentence: &Sentence, today: NaiveDate) -> Message {
        Message::new(
            self.topics.recognize(sentence),
            self.intents.recognize(sentence),
            self.slots.fill(sentence, today),
        )
    }
}

// ── Validation ────────────────────────────────────────────────

/// Validate a message. Pure; the same message always yields the same code.
pub fn validate_message(message: &Message) -> MessageValidationCode {
    match check(message) {
        Ok(_) => MessageValidationCode::Valid,
        Err(code) => code,
    }
}

/// Presence and sanity checks in a fixed order, then the cross-axis table.
fn check(message: &Message) -> Result<(Topic, &Intent, &Slots), MessageValidationCode> {
    let topic = message.topic().ok_or(MessageValidationCode::NoTopic)?;
    let intent = message.intent().ok_or(MessageValidationCode::NoIntent)?;
    let slots = message.slots().ok_or(MessageValidationCode::NoSlots)?;

    match topic {
        Topic::Unknown => return Err(MessageValidationCode::Unknown),
        Topic::Ambiguous => return Err(MessageValidationCode::AmbiguousTopic),
        Topic::Cases | Topic::Vaccinations => {}
    }
    if intent.has_unknown_axis() {
        return Err(MessageValidationCode::Unknown);
    }

    match decide(intent, slots) {
        MessageValidationCode::Valid => Ok((topic, intent, slots)),
        code => Err(code),
    }
}

fn decide(intent: &Intent, slots: &Slots) -> MessageValidationCode {
    use CalculationType as C;
    use MeasurementType as M;
    use MessageValidationCode as Code;
    use ValueType as V;

    // Only raw and summed daily numbers insist on an explicit date; the
    // other valid combinations fall back to a default timeframe.
    let needs_date = || {
        if slots.has_date() {
            Code::Valid
        } else {
            Code::NoTimeframe
        }
    };

    match (
        intent.value_type,
        intent.calculation_type,
        intent.measurement_type,
    ) {
        (V::Number, C::RawValue, M::Daily) => needs_date(),
        (V::Number, C::RawValue, M::Cumulative) => Code::Valid,
        (V::Number, C::Sum, M::Daily) => needs_date(),
        (V::Number, C::Sum, M::Cumulative) => Code::IntentMismatch,
        (V::Number, C::Maximum | C::Minimum, M::Cumulative) => Code::IntentMismatch,
        (V::Number, C::Maximum | C::Minimum, M::Daily) => Code::Valid,
        (V::Day | V::Location, C::Sum | C::RawValue, _) => Code::IntentMismatch,
        (V::Day | V::Location, C::Maximum | C::Minimum, M::Daily | M::Cumulative) => Code::Valid,
        (V::Unknown, _, _) | (_, C::Unknown, _) | (_, _, M::Unknown) => Code::UnsupportedAction,
    }
}

// ── Validated messages ────────────────────────────────────────

/// A message that passed validation. The only input an executor accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedMessage {
    topic: Topic,
    intent: Intent,
    slots: Slots,
}

impl TryFrom<Message> for ValidatedMessage {
    type Error = MessageValidationCode;

    fn try_from(message: Message) -> Result<Self, Self::Error> {
        let (topic, intent, slots) = check(&message)?;
        Ok(Self {
            topic,
            intent: *intent,
            slots: slots.clone(),
        })
    }
}

impl ValidatedMessage {
    pub fn topic(&self) -> Topic {
        self.topic
    }

    pub fn intent(&self) -> &Intent {
        &self.intent
    }

    pub fn slots(&self) -> &Slots {
        &self.slots
    }

    pub fn into_message(self) -> Message {
        Message::new(self.topic, self.intent, self.slots)
    }

    /// Fill in the defaults for absent slots.
    ///
    /// No location means the world. No date means today for a cumulative
    /// raw number ("how many so far") and the whole series otherwise.
    pub fn resolve(&self, today: NaiveDate) -> ResolvedQuery {
        let date = match self.slots.date {
            Some(DateSlot::Day { date }) => DateScope::Day { date },
            Some(DateSlot::Range { start, end }) => DateScope::Range { start, end },
            None => match (
                self.intent.value_type,
                self.intent.calculation_type,
                self.intent.measurement_type,
            ) {
                (ValueType::Number, CalculationType::RawValue, MeasurementType::Cumulative) => {
                    DateScope::Day { date: today }
                }
                _ => DateScope::AllTime,
            },
        };
        let location = self
            .slots
            .location
            .clone()
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string());

        ResolvedQuery {
            topic: self.topic,
            intent: self.intent,
            date,
            location,
        }
    }
}

/// The timeframe a query is answered over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DateScope {
    Day { date: NaiveDate },
    Range { start: NaiveDate, end: NaiveDate },
    AllTime,
}

/// A validated message with every default applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedQuery {
    pub topic: Topic,
    pub intent: Intent,
    pub date: DateScope,
    /// Normalized location name.
    pub location: String,
}

impl ResolvedQuery {
    /// Location as it reads in an answer ("the united kingdom").
    pub fn location_label(&self) -> String {
        location::with_article(&self.location)
    }
}

/// Turns a validated message into an answer.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    type Answer: Send;

    async fn execute(&self, message: &ValidatedMessage) -> NluResult<Self::Answer>;
}
