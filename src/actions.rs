//! Placeholder chat actions
//!
//! Stands in for the collaborator services until the hosting application
//! supplies real ones: every delegated action is logged and nothing else
//! happens.

use chatwire_core::{ChatActions, ChatEntryId};

/// Log-only [`ChatActions`] implementation.
///
/// Message content is never logged, only its length.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingActions;

impl ChatActions for LoggingActions {
    fn select_chat(&self, entry: ChatEntryId) {
        tracing::info!(entry = %entry, "chat selected");
    }

    fn send_message(&self, text: String) {
        tracing::info!(chars = text.chars().count(), "message submitted");
    }

    fn list_participants(&self) {
        tracing::info!("participant list requested");
    }
}
