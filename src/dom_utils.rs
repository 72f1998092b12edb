//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Most of the crate only needs three things from the browser: the global
//! window/document pair, a way to attach listeners that can be detached again,
//! and a "run this once the DOM is parsed" hook.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, Window};

use crate::error::MountError;

pub fn window() -> Result<Window, MountError> {
    web_sys::window().ok_or(MountError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, MountError> {
    window.document().ok_or(MountError::NoDocument)
}

/// `window.innerWidth` as f64, falling back to `fallback` when the browser
/// hands back something that is not a number.
pub fn inner_width(window: &Window, fallback: f64) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(fallback)
}

pub fn inner_height(window: &Window, fallback: f64) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(fallback)
}

// ---------------------------------------------------------------------------
// Event listeners
// ---------------------------------------------------------------------------

/// A registered DOM listener.  Dropping it removes the listener from its
/// target and frees the closure; call [`EventListener::forget`] for handlers
/// that should live as long as the page.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::wrap(Box::new(handler));
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    /// Leak the listener so it stays attached for the page lifetime.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Run `f` once the document has been parsed: right away when it already
/// is, otherwise on `DOMContentLoaded`.
pub fn on_dom_ready<F>(document: &Document, f: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }

    let mut f = Some(f);
    EventListener::new(document, "DOMContentLoaded", move |_| {
        if let Some(f) = f.take() {
            f();
        }
    })?
    .forget();
    Ok(())
}

/// Run `f` after two animation frames so that layout of freshly inserted
/// content has settled.
pub fn after_layout<F>(window: &Window, f: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let win = window.clone();
    let outer = Closure::once_into_js(move || {
        let inner = Closure::once_into_js(f);
        if let Err(e) = win.request_animation_frame(inner.unchecked_ref()) {
            log::warn!("second layout frame could not be scheduled: {:?}", e);
        }
    });
    window.request_animation_frame(outer.unchecked_ref())?;
    Ok(())
}
