//! Chat action capability consumed by the binder
//!
//! The binder translates page events into calls on [`ChatActions`]; the
//! implementations live with the hosting application (chat switching,
//! message dispatch, participant retrieval are all out of scope here).

use std::fmt;

/// Identifier of a single chat-list entry.
///
/// Derived at bind time from the entry's identifier attribute or, when
/// that is absent, from the entry's position in the rendered list.
/// Unique within the currently rendered list only; the value is opaque
/// to the binder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChatEntryId(String);

impl ChatEntryId {
    /// Wrap an already-derived identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as the collaborator sees it.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChatEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Semantic chat actions the page delegates to.
///
/// Every call is fire-and-forget from the binder's perspective: it
/// neither awaits nor inspects the outcome, and any asynchronous work
/// behind a call is the collaborator's concern.
pub trait ChatActions {
    /// A chat-list entry was clicked.
    fn select_chat(&self, entry: ChatEntryId);

    /// The message form was submitted with the drafted text.
    ///
    /// `text` may be empty; the binder performs no validation.
    fn send_message(&self, text: String);

    /// The participants button was clicked.
    fn list_participants(&self);
}
