//! Selector configuration for locating the wired elements

use serde::{Deserialize, Serialize};

/// CSS selectors naming the elements the binder wires.
///
/// The defaults follow the markup contract agreed with the page: chat
/// entries are list items under `.chat-list`, the message form and its
/// text input live inside `.chat`, and the participants button inside
/// `.chat-info`. A hosting page with different markup overrides
/// individual fields; fields left out of a deserialized override keep
/// their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    /// One selectable conversation in the chat list.
    pub chat_entry: String,
    /// The form wrapping the message input.
    pub message_form: String,
    /// The text input the outgoing draft is read from.
    pub message_input: String,
    /// The "view participants" button.
    pub participants_button: String,
    /// Attribute carrying a chat entry's stable identifier.
    pub entry_id_attribute: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            chat_entry: ".chat-list li".to_string(),
            message_form: ".chat form".to_string(),
            message_input: ".chat form input[type=\"text\"]".to_string(),
            participants_button: ".chat-info button".to_string(),
            entry_id_attribute: "data-chat-id".to_string(),
        }
    }
}
