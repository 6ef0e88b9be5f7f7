//! End-to-end understanding of one query: annotate, classify, validate.

use std::sync::Arc;

use cb_protocol::{Message, MessageValidationCode, QueryRecord};
use cb_treequery::Sentence;
use chrono::NaiveDate;

use crate::annotator::Annotator;
use crate::error::NluResult;
use crate::lexicon::{Lexicon, LexiconConfig};
use crate::message::{MessageBuilder, ValidatedMessage, validate_message};

/// What the caller should do with a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Valid; hand it to an executor.
    Ready(ValidatedMessage),
    /// Underspecified or ambiguous; ask the user to rephrase.
    Clarify(MessageValidationCode),
    /// The classifier produced an impossible message; answer with a
    /// generic fallback.
    Fault(MessageValidationCode),
}

impl Outcome {
    pub fn code(&self) -> MessageValidationCode {
        match self {
            Self::Ready(_) => MessageValidationCode::Valid,
            Self::Clarify(code) | Self::Fault(code) => *code,
        }
    }
}

/// Outcome of a query plus its audit record.
#[derive(Debug, Clone)]
pub struct Understanding {
    pub outcome: Outcome,
    pub record: QueryRecord,
}

/// Annotator, lexicon and compiled patterns, shared read-only across
/// concurrent queries.
pub struct Pipeline {
    annotator: Arc<dyn Annotator>,
    lexicon: Lexicon,
    builder: MessageBuilder,
}

impl Pipeline {
    pub fn new(annotator: Arc<dyn Annotator>, extra: &LexiconConfig) -> NluResult<Self> {
        let lexicon = Lexicon::with_extra(extra);
        let builder = MessageBuilder::new(&lexicon)?;
        Ok(Self {
            annotator,
            lexicon,
            builder,
        })
    }

    /// Understand `text`, resolving relative dates against `today`.
    ///
    /// Annotator failures and malformed trees are errors; everything else,
    /// including invalid messages, is an [`Outcome`].
    pub async fn understand(&self, text: &str, today: NaiveDate) -> NluResult<Understanding> {
        let annotated = self.annotator.annotate(text).await?;
        let sentence = self.lexicon.restem(Sentence::try_from(annotated)?);
        let message = self.builder.create_message(&sentence, today);
        Ok(self.judge(text, message))
    }

    fn judge(&self, text: &str, message: Message) -> Understanding {
        let code = validate_message(&message);
        let record = QueryRecord::new(text, message.clone(), code);

        let outcome = match ValidatedMessage::try_from(message) {
            Ok(validated) => {
                tracing::debug!(id = %record.id, text, "query understood");
                Outcome::Ready(validated)
            }
            Err(code) if code.is_user_error() => {
                tracing::debug!(id = %record.id, text, code = %code, "clarification needed");
                Outcome::Clarify(code)
            }
            Err(code) => {
                tracing::error!(
                    id = %record.id,
                    text,
                    code = %code,
                    topic = ?record.message.topic(),
                    intent = ?record.message.intent(),
                    slots = ?record.message.slots(),
                    "classifier produced an invalid message"
                );
                Outcome::Fault(code)
            }
        };

        Understanding { outcome, record }
    }
}
