use wasm_bindgen::prelude::*;
use web_sys::Window;

use super::field::ParticleField;
use super::render;
use super::surface::CanvasSurface;
use crate::config::FieldConfig;
use crate::dom_utils;

/// Canvas + simulation.  Shared between the frame loop and the event
/// handlers through `Rc<RefCell<ParticleSystem>>`.
pub struct ParticleSystem {
    surface: CanvasSurface,
    field: ParticleField,
}

impl ParticleSystem {
    /// Size the canvas and populate the field for the current window.
    pub fn new(surface: CanvasSurface, config: FieldConfig, window: &Window, seed: u64) -> Result<Self, JsValue> {
        let bounds = surface.sync_size()?;
        let window_width = dom_utils::inner_width(window, bounds.width);
        let field = ParticleField::with_window_width(config, bounds, window_width, seed);
        log::debug!(
            "particle field ready: {} particles on {}x{}",
            field.len(),
            bounds.width,
            bounds.height
        );
        Ok(Self { surface, field })
    }

    pub fn surface(&self) -> &CanvasSurface {
        &self.surface
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }

    /// Layout changed: resync the canvas and rebuild the particle set.
    pub fn resize(&mut self, window: &Window) -> Result<(), JsValue> {
        let bounds = self.surface.sync_size()?;
        let window_width = dom_utils::inner_width(window, bounds.width);
        let count = self.field.resize(bounds, window_width);
        log::debug!("resized to {}x{}, {} particles", bounds.width, bounds.height, count);
        Ok(())
    }

    /// One animation frame: physics, then paint.
    pub fn frame(&mut self) {
        self.field.update();
        render::draw(self.surface.context_mut(), &self.field);
    }
}
