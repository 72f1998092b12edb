use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use super::driver::AnimationLoop;
use super::input;
use super::surface::CanvasSurface;
use super::system::ParticleSystem;
use crate::config::FieldConfig;
use crate::dom_utils::{self, EventListener};
use crate::error::MountError;

/// A running particle field.  Returned to JS by [`mount_particles`];
/// `stop()` (or letting JS free the handle) tears everything down.
#[wasm_bindgen]
pub struct ParticleHandle {
    system: Rc<RefCell<ParticleSystem>>,
    animation: Option<AnimationLoop>,
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl ParticleHandle {
    /// Cancel the frame loop and detach every listener.  Safe to call twice.
    pub fn stop(&mut self) {
        if let Some(animation) = self.animation.take() {
            animation.stop();
        }
        self.listeners.clear();
        log::debug!("particle field stopped");
    }

    #[wasm_bindgen(getter)]
    pub fn is_running(&self) -> bool {
        self.animation.as_ref().map_or(false, AnimationLoop::is_running)
    }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> usize {
        self.system.borrow().field().len()
    }
}

/// Mount the particle field on the canvas with id `canvas_id`.
///
/// `config` is an optional partial object (see `FieldConfig`).  Returns
/// `undefined` when there is no such canvas.
#[wasm_bindgen]
pub fn mount_particles(canvas_id: &str, config: JsValue) -> Result<Option<ParticleHandle>, JsValue> {
    let config = FieldConfig::from_js(config)?;
    let window = dom_utils::window()?;
    let document = dom_utils::document(&window)?;
    Ok(mount(&window, &document, canvas_id, config)?)
}

pub fn mount(
    window: &Window,
    document: &Document,
    canvas_id: &str,
    config: FieldConfig,
) -> Result<Option<ParticleHandle>, MountError> {
    let Some(surface) = CanvasSurface::find(document, canvas_id) else {
        log::debug!("no 2D canvas with id '{}', particle field skipped", canvas_id);
        return Ok(None);
    };

    let system = ParticleSystem::new(surface, config, window, random_seed())?;
    let system = Rc::new(RefCell::new(system));
    let listeners = input::wire(window, &system)?;

    let animation = {
        let system = system.clone();
        AnimationLoop::start(window, move |_timestamp| {
            system.borrow_mut().frame();
        })?
    };

    Ok(Some(ParticleHandle {
        system,
        animation: Some(animation),
        listeners,
    }))
}

fn random_seed() -> u64 {
    // 2^53: every integer below this is exactly representable in an f64
    (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64
}
