//! Error types for verification request processing.
//!
//! Every failure while handling one inbound message maps to exactly one of
//! these variants. None of them is fatal to the worker process: the worker
//! logs the error with the message's correlation id and moves on to the next
//! message. Retry, if any, is the queue transport's redelivery policy.

use thiserror::Error;

/// Errors that can occur while processing a single verification request
#[derive(Error, Debug)]
pub enum ProcessingError {
    /// The inbound payload could not be parsed as a verification request
    #[error("Malformed request payload: {detail}")]
    MalformedPayload { detail: String },

    /// The payload parsed but carries no recipient email
    #[error("Request payload is missing the recipient email")]
    MissingIdentity,

    /// The composer was handed an empty email or code (caller contract bug)
    #[error("Invalid notification composition: empty {field}")]
    InvalidComposition { field: String },

    /// The verification store rejected or failed the write
    #[error("Persistence error: {message}")]
    Persistence { message: String },

    /// The random source failed to produce a code
    #[error("Code generation failed: {message}")]
    Generation { message: String },

    /// Serializing the outbound notification failed (should never happen)
    #[error("Failed to encode outbound notification: {detail}")]
    Encode { detail: String },
}

impl ProcessingError {
    /// Stable snake_case name of the error kind, used as the structured
    /// `error_kind` field in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            ProcessingError::MalformedPayload { .. } => "malformed_payload",
            ProcessingError::MissingIdentity => "missing_identity",
            ProcessingError::InvalidComposition { .. } => "invalid_composition",
            ProcessingError::Persistence { .. } => "persistence_error",
            ProcessingError::Generation { .. } => "generation_failure",
            ProcessingError::Encode { .. } => "encode_failure",
        }
    }
}

pub type ProcessingResult<T> = Result<T, ProcessingError>;
