//! Browser adapter and wasm entry points for chat page wiring
//!
//! The hosting page loads this module and calls [`bind_chat_page`] once
//! from its bootstrap code; the binder in `chatwire-core` then delegates
//! chat selection, message sends, and participant listing to a
//! [`ChatActions`](chatwire_core::ChatActions) capability. Until the
//! hosting application provides real services, the wired capability is
//! [`LoggingActions`].
//!
//! Everything browser-facing is gated on `target_arch = "wasm32"`; the
//! native build exposes only the selector parsing used by tests and by
//! hosts embedding the library directly.

mod actions;
#[cfg(target_arch = "wasm32")]
mod dom;

pub use actions::LoggingActions;
#[cfg(target_arch = "wasm32")]
pub use dom::{BrowserElement, BrowserEvent, BrowserPage};

use chatwire_core::Selectors;

/// Parse a selector override blob supplied by the hosting page.
///
/// `None` or blank input keeps the defaults; a JSON object overrides
/// exactly the selector fields it names.
pub fn parse_selectors(json: Option<&str>) -> Result<Selectors, serde_json::Error> {
    match json {
        Some(raw) if !raw.trim().is_empty() => serde_json::from_str(raw),
        _ => Ok(Selectors::default()),
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use chatwire_core::UiBinder;

    use crate::actions::LoggingActions;
    use crate::dom::BrowserPage;

    thread_local! {
        // Parks the bound binder so its listener subscriptions live as
        // long as the page.
        static BINDER: RefCell<Option<UiBinder<BrowserPage>>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
    }

    /// Wire the chat page. Called once by the hosting page's bootstrap.
    ///
    /// `selectors_json` optionally overrides the default selectors with
    /// a JSON object naming any subset of the selector fields. Binding a
    /// page that is already wired is a no-op. A page missing a required
    /// element raises a JS error carrying the failing selector, so the
    /// host's error reporting sees the markup mismatch immediately.
    #[wasm_bindgen]
    pub fn bind_chat_page(selectors_json: Option<String>) -> Result<(), JsValue> {
        let already_bound = BINDER.with(|cell| cell.borrow().is_some());
        if already_bound {
            tracing::debug!("chat page already bound; ignoring repeat call");
            return Ok(());
        }

        let selectors = crate::parse_selectors(selectors_json.as_deref())
            .map_err(|error| JsValue::from_str(&format!("invalid selector config: {error}")))?;
        let page = BrowserPage::new()
            .ok_or_else(|| JsValue::from_str("document is unavailable"))?;

        let mut binder = UiBinder::with_selectors(page, selectors);
        match binder.initialize(Rc::new(LoggingActions)) {
            Ok(()) => {
                BINDER.with(|cell| *cell.borrow_mut() = Some(binder));
                Ok(())
            }
            Err(error) => {
                tracing::error!("chat page binding failed: {error}");
                Err(JsValue::from_str(&error.to_string()))
            }
        }
    }
}
