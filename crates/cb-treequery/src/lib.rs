//! Tree queries over annotated dependency parses.
//!
//! A [`Pattern`] is an ordered list of node constraints: the first names a
//! root node and its attribute predicates, every later one relates a new
//! node to an already bound one through a [`RelOp`]. Matching is a
//! backtracking search over the tokens of a [`Sentence`]; a [`PatternSet`]
//! matches when any of its alternatives does.
//!
//! The crate knows nothing about topics or intents; callers supply the
//! word lists that parametrize the predicates.

pub mod builder;
pub mod error;
pub mod matcher;
pub mod pattern;
pub mod tree;

// Re-export key types for convenience
pub use builder::SentenceBuilder;
pub use error::{TreeError, TreeResult};
pub use pattern::{NodeSpec, Pattern, PatternBuilder, PatternSet, Predicate, RelOp};
pub use tree::{AnnotatedSentence, Entity, EntityLabel, Sentence, Token};
