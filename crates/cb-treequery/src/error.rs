//! Tree and pattern error types.

use thiserror::Error;

/// Errors raised while indexing a sentence or compiling a pattern.
///
/// None of these are classification outcomes: a malformed tree is an
/// annotator failure and a malformed pattern is a configuration error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("pattern {pattern}: constraint references unbound node '{node}'")]
    UnboundNode { pattern: String, node: String },

    #[error("pattern {pattern}: node '{node}' is bound more than once")]
    DuplicateNode { pattern: String, node: String },

    #[error("token {token} has head {head}, but the sentence has {len} tokens")]
    InvalidHead { token: usize, head: usize, len: usize },

    #[error("sentence has more than one root (tokens {first} and {second})")]
    MultipleRoots { first: usize, second: usize },

    #[error("non-empty sentence has no root token")]
    NoRoot,

    #[error("dependency cycle through token {0}")]
    Cycle(usize),

    #[error("unknown relational operator: {0}")]
    UnknownOperator(String),
}

/// Convenience alias for tree query results.
pub type TreeResult<T> = Result<T, TreeError>;
