//! Live-document implementation of the element locator
//!
//! Wraps `web_sys` queries and `gloo` event listeners so the binder in
//! `chatwire-core` can run against the real page. Listener subscriptions
//! are [`EventListener`] values; dropping one detaches the handler.

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlTextAreaElement};

use chatwire_core::{DomElement, DomEvent, ElementLocator, EventHandler, EventKind};

/// Event delivered by the browser.
pub struct BrowserEvent(web_sys::Event);

impl DomEvent for BrowserEvent {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}

/// Handle to a live element. Clones refer to the same DOM node.
#[derive(Clone)]
pub struct BrowserElement {
    element: Element,
}

impl BrowserElement {
    fn new(element: Element) -> Self {
        Self { element }
    }
}

impl DomElement for BrowserElement {
    type Event = BrowserEvent;
    type Subscription = EventListener;

    fn attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }

    fn value(&self) -> String {
        if let Some(input) = self.element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = self.element.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn set_value(&self, value: &str) {
        if let Some(input) = self.element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = self.element.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        }
    }

    fn listen(&self, kind: EventKind, mut handler: EventHandler<Self::Event>) -> EventListener {
        EventListener::new(&self.element, kind.name(), move |event| {
            let event = BrowserEvent(event.clone());
            handler(&event);
        })
    }
}

/// Locator over the browser's live document.
pub struct BrowserPage {
    document: Document,
}

impl BrowserPage {
    /// Page access through the current window's document, if any.
    pub fn new() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }
}

impl ElementLocator for BrowserPage {
    type Element = BrowserElement;

    fn query(&self, selector: &str) -> Option<BrowserElement> {
        // An invalid selector reads the same as absent markup.
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .map(BrowserElement::new)
    }

    fn query_all(&self, selector: &str) -> Vec<BrowserElement> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(BrowserElement::new)
            .collect()
    }
}
