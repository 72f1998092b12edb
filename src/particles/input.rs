//! Pointer, click and layout listeners for a mounted particle system.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Window};

use super::system::ParticleSystem;
use crate::dom_utils::EventListener;

/// Attach every listener the field needs.  The returned guards detach them
/// again when dropped.
pub fn wire(window: &Window, system: &Rc<RefCell<ParticleSystem>>) -> Result<Vec<EventListener>, JsValue> {
    let canvas = system.borrow().surface().canvas().clone();
    let mut listeners = Vec::with_capacity(5);

    // --- pointer -----------------------------------------------------------
    {
        let system = system.clone();
        listeners.push(EventListener::new(&canvas, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                let mut system = system.borrow_mut();
                let (x, y) = system.surface().pointer_offset(event);
                system.field_mut().set_pointer(x, y);
            }
        })?);
    }
    {
        let system = system.clone();
        listeners.push(EventListener::new(&canvas, "mouseleave", move |_| {
            system.borrow_mut().field_mut().clear_pointer();
        })?);
    }
    {
        let system = system.clone();
        listeners.push(EventListener::new(&canvas, "click", move |_| {
            let mut system = system.borrow_mut();
            let spawned = system.field_mut().spawn_burst();
            log::debug!("click spawned {} particles ({} total)", spawned, system.field().len());
        })?);
    }

    // --- layout ------------------------------------------------------------
    {
        let system = system.clone();
        let win = window.clone();
        listeners.push(EventListener::new(window, "resize", move |_| {
            if let Err(e) = system.borrow_mut().resize(&win) {
                log::warn!("particle canvas resize failed: {:?}", e);
            }
        })?);
    }
    if let Some(viewport) = window.visual_viewport() {
        let system = system.clone();
        let win = window.clone();
        listeners.push(EventListener::new(&viewport, "resize", move |_| {
            if let Err(e) = system.borrow_mut().resize(&win) {
                log::warn!("particle canvas resize failed: {:?}", e);
            }
        })?);
    }

    Ok(listeners)
}
