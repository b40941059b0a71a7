//! Engine error type
//!
//! Only corpus mutation and explicit lookups can fail. A query that matches
//! nothing is a normal outcome and is rendered as text, never raised here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A new document lacks a required field (or it is blank)
    #[error("malformed document: missing required field '{0}'")]
    MissingField(&'static str),

    /// Relevance score is not a finite number in `[0, 10]`
    #[error("malformed document: relevance_score {0} is outside [0, 10]")]
    RelevanceOutOfRange(f64),

    #[error("document not found: {0}")]
    DocumentNotFound(String),
}

impl EngineError {
    /// True for validation failures on `add_document`.
    pub fn is_malformed_document(&self) -> bool {
        matches!(
            self,
            EngineError::MissingField(_) | EngineError::RelevanceOutOfRange(_)
        )
    }
}
