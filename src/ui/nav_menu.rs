//! Hamburger navigation toggle.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget};

use crate::constants::*;
use crate::dom_utils::EventListener;

fn open_close(hamburger: &Element, menu: &Element, open: bool) {
    for el in [hamburger, menu] {
        let _ = el.class_list().toggle_with_force(ACTIVE_CLASS, open);
    }
}

/// Wire the hamburger, the nav links and the click-outside handler.
/// Returns `false` (and does nothing) when the hamburger or the menu is
/// missing from the page.
pub fn setup(document: &Document) -> Result<bool, JsValue> {
    let (Some(hamburger), Some(menu)) = (
        document.query_selector(HAMBURGER_SELECTOR)?,
        document.query_selector(NAV_MENU_SELECTOR)?,
    ) else {
        log::debug!("navigation menu not found, toggle skipped");
        return Ok(false);
    };

    // Hamburger toggles both elements
    {
        let (h, m) = (hamburger.clone(), menu.clone());
        EventListener::new(&hamburger, "click", move |_| {
            let _ = h.class_list().toggle(ACTIVE_CLASS);
            let _ = m.class_list().toggle(ACTIVE_CLASS);
        })?
        .forget();
    }

    // Following a link closes the menu
    let links = document.query_selector_all(NAV_LINK_SELECTOR)?;
    for i in 0..links.length() {
        let Some(link) = links.get(i).and_then(|n| n.dyn_into::<EventTarget>().ok()) else {
            continue;
        };
        let (h, m) = (hamburger.clone(), menu.clone());
        EventListener::new(&link, "click", move |_| open_close(&h, &m, false))?.forget();
    }

    // Clicking anywhere outside the nav bar closes an open menu
    {
        let (h, m) = (hamburger.clone(), menu.clone());
        EventListener::new(document, "click", move |event| {
            let inside_nav = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(NAV_CONTAINER_SELECTOR).ok().flatten())
                .is_some();
            if !inside_nav && m.class_list().contains(ACTIVE_CLASS) {
                open_close(&h, &m, false);
            }
        })?
        .forget();
    }

    Ok(true)
}
