//! Message understanding for COVID statistics queries.
//!
//! Turns an annotated sentence into a [`cb_protocol::Message`] (topic,
//! four-axis intent and slots) and validates it before it may reach an
//! answer executor.
//!
//! Pattern tables and trigger lexicons are built once at start-up and
//! shared read-only; every classification is a pure function of the
//! sentence.

pub mod annotator;
pub mod error;
pub mod intent;
pub mod lexicon;
pub mod message;
pub mod mock;
pub mod patterns;
pub mod pipeline;
pub mod slots;
pub mod topic;

// Re-export key types for convenience
pub use annotator::{Annotator, AnnotatorConfig, HttpAnnotator};
pub use error::{NluError, NluResult};
pub use intent::IntentRecognizer;
pub use lexicon::{Lexicon, LexiconConfig};
pub use message::{
    DateScope, MessageBuilder, QueryExecutor, ResolvedQuery, ValidatedMessage, validate_message,
};
pub use mock::MockAnnotator;
pub use patterns::PatternTable;
pub use pipeline::{Outcome, Pipeline, Understanding};
pub use slots::SlotFiller;
pub use topic::TopicRecognizer;
