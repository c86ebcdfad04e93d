//! Chat page wiring core
//!
//! Translates UI events on a chat page into calls on an abstract
//! [`ChatActions`] capability: clicking a chat-list entry selects that
//! chat, submitting the message form sends the drafted text, and the
//! participants button asks for the participant list. The module owns no
//! chat state and performs no rendering; it is purely the binding between
//! the page's element tree and collaborator-supplied services.
//!
//! The binder reaches the page through the [`ElementLocator`] abstraction,
//! so the same wiring runs against a live browser document or an
//! in-memory element tree in tests.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::rc::Rc;
//!
//! use chatwire_core::UiBinder;
//!
//! let mut binder = UiBinder::new(page);
//! binder.initialize(Rc::new(actions))?;
//! // Listeners stay attached for as long as the binder is alive.
//! ```

pub mod actions;
pub mod binder;
pub mod dom;
pub mod error;
pub mod selectors;

// Re-exports
pub use actions::{ChatActions, ChatEntryId};
pub use binder::UiBinder;
pub use dom::{DomElement, DomEvent, ElementLocator, EventHandler, EventKind};
pub use error::{WireError, WireResult};
pub use selectors::Selectors;
