//! Element-tree abstraction between the binder and the host page
//!
//! The binder never touches a concrete DOM. It queries elements through
//! [`ElementLocator`] and listens through [`DomElement`]; a browser
//! adapter implements these over the live document, and tests substitute
//! an in-memory tree.

/// Event kinds the binder subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Pointer click on an element.
    Click,
    /// Submission of a form.
    Submit,
}

impl EventKind {
    /// The event name as the host spells it.
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::Submit => "submit",
        }
    }
}

/// A dispatched event as seen by a handler.
pub trait DomEvent {
    /// Suppress the host's default reaction to the event
    /// (for a form submission, the page navigation).
    fn prevent_default(&self);
}

/// Callback invoked each time a subscribed event fires.
pub type EventHandler<E> = Box<dyn FnMut(&E)>;

/// Handle to one element of the host page.
///
/// Handles are cheap to clone and refer to the same underlying element.
pub trait DomElement: Clone {
    /// Event payload delivered to handlers on this element.
    type Event: DomEvent;

    /// Keeps an attached listener alive; dropping it detaches the
    /// listener.
    type Subscription;

    /// Read an attribute, if present.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Current text value (meaningful for input elements; empty
    /// otherwise).
    fn value(&self) -> String;

    /// Replace the text value (no-op for non-input elements).
    fn set_value(&self, value: &str);

    /// Attach `handler` for events of `kind` on this element.
    fn listen(&self, kind: EventKind, handler: EventHandler<Self::Event>) -> Self::Subscription;
}

/// Read-only query access to the host page's element tree.
pub trait ElementLocator {
    /// Element handle type produced by queries.
    type Element: DomElement;

    /// First element matching `selector`, if any.
    fn query(&self, selector: &str) -> Option<Self::Element>;

    /// All elements matching `selector`, in tree order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
}
