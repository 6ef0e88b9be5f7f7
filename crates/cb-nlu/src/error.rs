//! Message-understanding error types.

use cb_treequery::TreeError;
use thiserror::Error;

/// Errors that abort understanding before a message is built.
///
/// Validation outcomes are not errors; see
/// [`cb_protocol::MessageValidationCode`].
#[derive(Debug, Error)]
pub enum NluError {
    #[error("annotator request failed: {0}")]
    Annotation(String),

    #[error("annotator returned status {status}: {body}")]
    AnnotatorStatus { status: u16, body: String },

    #[error("malformed dependency tree: {0}")]
    Tree(#[from] TreeError),

    #[error("no annotation for input: {0}")]
    NotFound(String),
}

/// Convenience alias for message-understanding results.
pub type NluResult<T> = Result<T, NluError>;
