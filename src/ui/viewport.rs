//! Mobile viewport-height fix.
//!
//! Mobile browsers count the collapsing URL bar into `100vh`.  Pages size
//! the hero with `calc(var(--vh) * 100)` instead, and this keeps `--vh` equal
//! to one percent of the real inner height.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Window};

use crate::constants::VIEWPORT_HEIGHT_VAR;
use crate::dom_utils::{self, EventListener};

/// CSS value for `--vh` given `window.innerHeight`.
pub fn vh_value(inner_height: f64) -> String {
    format!("{}px", inner_height * 0.01)
}

/// Write `--vh` onto `<html>`.
pub fn apply(window: &Window) -> Result<(), JsValue> {
    let Some(root) = window
        .document()
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };
    let height = dom_utils::inner_height(window, 0.0);
    root.style().set_property(VIEWPORT_HEIGHT_VAR, &vh_value(height))
}

/// Apply once now and again on every window / visual-viewport resize.
pub fn install(window: &Window) -> Result<(), JsValue> {
    apply(window)?;

    let win = window.clone();
    EventListener::new(window, "resize", move |_| {
        if let Err(e) = apply(&win) {
            log::warn!("failed to update {}: {:?}", VIEWPORT_HEIGHT_VAR, e);
        }
    })?
    .forget();

    if let Some(viewport) = window.visual_viewport() {
        let win = window.clone();
        EventListener::new(&viewport, "resize", move |_| {
            if let Err(e) = apply(&win) {
                log::warn!("failed to update {}: {:?}", VIEWPORT_HEIGHT_VAR, e);
            }
        })?
        .forget();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vh_is_one_percent_of_height() {
        assert_eq!(vh_value(800.0), "8px");
        assert_eq!(vh_value(0.0), "0px");
    }
}
