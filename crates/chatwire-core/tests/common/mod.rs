//! In-memory element tree and recording actions for binder tests
//!
//! Substitutes for a real browser document: selector matching is
//! literal (the tree maps selector strings to elements), which is all
//! the binder needs.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use chatwire_core::{ChatActions, ChatEntryId, DomElement, DomEvent, ElementLocator, EventHandler, EventKind};

/// Event delivered to fake listeners; records `prevent_default` calls.
pub struct FakeEvent {
    prevented: Cell<bool>,
}

impl FakeEvent {
    fn new() -> Self {
        Self {
            prevented: Cell::new(false),
        }
    }

    /// Whether any handler suppressed the default action.
    pub fn default_prevented(&self) -> bool {
        self.prevented.get()
    }
}

impl DomEvent for FakeEvent {
    fn prevent_default(&self) {
        self.prevented.set(true);
    }
}

struct ListenerSlot {
    id: u64,
    kind: EventKind,
    handler: Rc<RefCell<EventHandler<FakeEvent>>>,
}

#[derive(Default)]
struct NodeState {
    attributes: Vec<(String, String)>,
    value: String,
    listeners: Vec<ListenerSlot>,
    next_listener_id: u64,
}

/// Handle to one node of the fake tree. Clones refer to the same node.
#[derive(Clone, Default)]
pub struct FakeElement {
    state: Rc<RefCell<NodeState>>,
}

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_attribute(&self, name: &str, value: &str) {
        let mut state = self.state.borrow_mut();
        if let Some(slot) = state.attributes.iter_mut().find(|(n, _)| n == name) {
            slot.1 = value.to_string();
        } else {
            state.attributes.push((name.to_string(), value.to_string()));
        }
    }

    /// Number of listeners currently attached, across all event kinds.
    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// Fire an event of `kind`, invoking every matching listener.
    ///
    /// Handlers run outside the node borrow so they may freely read or
    /// write this node (or any other).
    pub fn dispatch(&self, kind: EventKind) -> FakeEvent {
        let handlers: Vec<_> = self
            .state
            .borrow()
            .listeners
            .iter()
            .filter(|slot| slot.kind == kind)
            .map(|slot| Rc::clone(&slot.handler))
            .collect();

        let event = FakeEvent::new();
        for handler in handlers {
            let mut handler = handler.borrow_mut();
            (*handler)(&event);
        }
        event
    }

    pub fn click(&self) -> FakeEvent {
        self.dispatch(EventKind::Click)
    }

    pub fn submit(&self) -> FakeEvent {
        self.dispatch(EventKind::Submit)
    }
}

/// Detaches its listener when dropped, like a real DOM listener guard.
pub struct FakeSubscription {
    node: Weak<RefCell<NodeState>>,
    id: u64,
}

impl Drop for FakeSubscription {
    fn drop(&mut self) {
        if let Some(state) = self.node.upgrade() {
            state.borrow_mut().listeners.retain(|slot| slot.id != self.id);
        }
    }
}

impl DomElement for FakeElement {
    type Event = FakeEvent;
    type Subscription = FakeSubscription;

    fn attribute(&self, name: &str) -> Option<String> {
        self.state
            .borrow()
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    fn value(&self) -> String {
        self.state.borrow().value.clone()
    }

    fn set_value(&self, value: &str) {
        self.state.borrow_mut().value = value.to_string();
    }

    fn listen(&self, kind: EventKind, handler: EventHandler<Self::Event>) -> FakeSubscription {
        let mut state = self.state.borrow_mut();
        let id = state.next_listener_id;
        state.next_listener_id += 1;
        state.listeners.push(ListenerSlot {
            id,
            kind,
            handler: Rc::new(RefCell::new(handler)),
        });
        FakeSubscription {
            node: Rc::downgrade(&self.state),
            id,
        }
    }
}

/// Fake page: an ordered list of (selector, element) pairs.
///
/// Clones share the same tree, so a test can keep dispatching events on
/// elements after handing the page to a binder.
#[derive(Clone, Default)]
pub struct FakePage {
    nodes: Rc<RefCell<Vec<(String, FakeElement)>>>,
}

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an existing element under `selector`.
    pub fn insert(&self, selector: &str, element: &FakeElement) {
        self.nodes
            .borrow_mut()
            .push((selector.to_string(), element.clone()));
    }

    /// Create a fresh element under `selector` and return its handle.
    pub fn add(&self, selector: &str) -> FakeElement {
        let element = FakeElement::new();
        self.insert(selector, &element);
        element
    }
}

impl ElementLocator for FakePage {
    type Element = FakeElement;

    fn query(&self, selector: &str) -> Option<FakeElement> {
        self.nodes
            .borrow()
            .iter()
            .find(|(s, _)| s == selector)
            .map(|(_, element)| element.clone())
    }

    fn query_all(&self, selector: &str) -> Vec<FakeElement> {
        self.nodes
            .borrow()
            .iter()
            .filter(|(s, _)| s == selector)
            .map(|(_, element)| element.clone())
            .collect()
    }
}

/// One delegated call, as seen by [`RecordingActions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionCall {
    SelectChat(String),
    SendMessage(String),
    ListParticipants,
}

/// [`ChatActions`] implementation that records every delegated call.
#[derive(Default)]
pub struct RecordingActions {
    calls: RefCell<Vec<ActionCall>>,
}

impl RecordingActions {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Snapshot of every call so far, in delegation order.
    pub fn calls(&self) -> Vec<ActionCall> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl ChatActions for RecordingActions {
    fn select_chat(&self, entry: ChatEntryId) {
        self.calls
            .borrow_mut()
            .push(ActionCall::SelectChat(entry.as_str().to_string()));
    }

    fn send_message(&self, text: String) {
        self.calls.borrow_mut().push(ActionCall::SendMessage(text));
    }

    fn list_participants(&self) {
        self.calls.borrow_mut().push(ActionCall::ListParticipants);
    }
}
