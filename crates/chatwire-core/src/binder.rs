//! The binder that wires page events to chat actions

use std::rc::Rc;

use crate::actions::{ChatActions, ChatEntryId};
use crate::dom::{DomElement, DomEvent, ElementLocator, EventKind};
use crate::error::{WireError, WireResult};
use crate::selectors::Selectors;

/// Wires a chat page's events to a [`ChatActions`] capability.
///
/// The binder is a pure wiring layer: it owns no chat state, only the
/// listener subscriptions it attached. Its lifecycle is `Unbound →
/// Bound`, driven once by [`UiBinder::initialize`]; initializing a bound
/// binder again is a no-op, so listeners never double-fire. Dropping the
/// binder detaches everything it attached.
pub struct UiBinder<L: ElementLocator> {
    locator: L,
    selectors: Selectors,
    subscriptions: Vec<<L::Element as DomElement>::Subscription>,
    bound: bool,
}

impl<L: ElementLocator> UiBinder<L> {
    /// Create an unbound binder using the default selectors.
    pub fn new(locator: L) -> Self {
        Self::with_selectors(locator, Selectors::default())
    }

    /// Create an unbound binder locating elements with `selectors`.
    pub fn with_selectors(locator: L, selectors: Selectors) -> Self {
        Self {
            locator,
            selectors,
            subscriptions: Vec::new(),
            bound: false,
        }
    }

    /// Whether [`UiBinder::initialize`] has already attached listeners.
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// The selectors this binder locates elements with.
    pub fn selectors(&self) -> &Selectors {
        &self.selectors
    }

    /// Attach the chat page listeners, delegating to `actions`.
    ///
    /// Wires three interactions:
    ///
    /// 1. a click on any chat-list entry calls
    ///    [`ChatActions::select_chat`] with that entry's identifier;
    /// 2. a message-form submission suppresses the default action, reads
    ///    the input's draft, calls [`ChatActions::send_message`] (empty
    ///    drafts included), then clears the input;
    /// 3. a click on the participants button calls
    ///    [`ChatActions::list_participants`].
    ///
    /// Required elements are located before anything is attached, so a
    /// [`WireError`] leaves the page untouched. An empty chat list is
    /// not an error; it simply attaches no entry listeners.
    pub fn initialize(&mut self, actions: Rc<dyn ChatActions>) -> WireResult<()>
    where
        <L as ElementLocator>::Element: 'static,
    {
        if self.bound {
            tracing::debug!("binder already bound; ignoring repeat initialize");
            return Ok(());
        }

        let form = self
            .locator
            .query(&self.selectors.message_form)
            .ok_or_else(|| WireError::MessageFormMissing(self.selectors.message_form.clone()))?;
        let input = self
            .locator
            .query(&self.selectors.message_input)
            .ok_or_else(|| WireError::MessageInputMissing(self.selectors.message_input.clone()))?;
        let button = self.locator.query(&self.selectors.participants_button).ok_or_else(|| {
            WireError::ParticipantsButtonMissing(self.selectors.participants_button.clone())
        })?;
        let entries = self.locator.query_all(&self.selectors.chat_entry);

        let mut subscriptions = Vec::with_capacity(entries.len() + 2);

        for (position, entry) in entries.iter().enumerate() {
            let id = entry_identity(entry.attribute(&self.selectors.entry_id_attribute), position);
            let actions = Rc::clone(&actions);
            subscriptions.push(entry.listen(
                EventKind::Click,
                Box::new(move |_event| actions.select_chat(id.clone())),
            ));
        }

        {
            let actions = Rc::clone(&actions);
            let input = input.clone();
            subscriptions.push(form.listen(
                EventKind::Submit,
                Box::new(move |event| {
                    // A submit must never navigate the page.
                    event.prevent_default();
                    let draft = input.value();
                    actions.send_message(draft);
                    input.set_value("");
                }),
            ));
        }

        subscriptions.push(button.listen(
            EventKind::Click,
            Box::new(move |_event| actions.list_participants()),
        ));

        tracing::debug!(chat_entries = entries.len(), "chat page listeners attached");

        self.subscriptions = subscriptions;
        self.bound = true;
        Ok(())
    }
}

/// Derive an entry's identifier from its id attribute, falling back to
/// its zero-based position in the rendered list.
fn entry_identity(attribute: Option<String>, position: usize) -> ChatEntryId {
    match attribute {
        Some(id) if !id.is_empty() => ChatEntryId::new(id),
        _ => ChatEntryId::new(position.to_string()),
    }
}
