use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, MouseEvent};

use super::field::Bounds;

/// The `<canvas>` the field is painted on, plus its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up `#id` and grab a 2D context.  `None` when the element is
    /// missing, is not a canvas, or refuses a 2D context.
    pub fn find(document: &Document, id: &str) -> Option<Self> {
        let canvas = document
            .get_element_by_id(id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, context })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn context_mut(&mut self) -> &mut CanvasRenderingContext2d {
        &mut self.context
    }

    /// Match the drawing buffer and the CSS box to the parent element (or to
    /// the canvas's own box when it has no parent), floored to whole pixels.
    pub fn sync_size(&self) -> Result<Bounds, JsValue> {
        let rect = match self.canvas.parent_element() {
            Some(parent) => parent.get_bounding_client_rect(),
            None => self.canvas.get_bounding_client_rect(),
        };
        let width = rect.width().floor().max(0.0);
        let height = rect.height().floor().max(0.0);

        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);

        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", width))?;
        style.set_property("height", &format!("{}px", height))?;

        Ok(Bounds::new(width, height))
    }

    /// Pointer position of `event` relative to the canvas's top-left corner.
    pub fn pointer_offset(&self, event: &MouseEvent) -> (f64, f64) {
        let rect = self.canvas.get_bounding_client_rect();
        let (x, y) = client_position(event);
        (x - rect.left(), y - rect.top())
    }
}

/// `clientX`/`clientY` with sub-pixel precision.  web-sys exposes them as
/// `i32`, so read the properties directly and only fall back to the
/// truncated getters when they are not numbers.
pub fn client_position(event: &MouseEvent) -> (f64, f64) {
    let read = |key: &str, fallback: i32| {
        js_sys::Reflect::get(event, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(fallback as f64)
    };
    (read("clientX", event.client_x()), read("clientY", event.client_y()))
}
