//! Error types for chat page wiring

use thiserror::Error;

/// Bind-time configuration error.
///
/// Every variant means a required element could not be located when the
/// binder initialized, i.e. the binder's selectors and the host markup
/// disagree. Each variant carries the selector that found nothing.
/// Runtime event handling never produces errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    /// Message form was not found at bind time
    #[error("Message form not found: {0}")]
    MessageFormMissing(String),

    /// Message input was not found at bind time
    #[error("Message input not found: {0}")]
    MessageInputMissing(String),

    /// Participants button was not found at bind time
    #[error("Participants button not found: {0}")]
    ParticipantsButtonMissing(String),
}

/// Result type alias using WireError
pub type WireResult<T> = Result<T, WireError>;
