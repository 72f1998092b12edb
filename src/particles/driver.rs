//! requestAnimationFrame loop with an off switch.
//!
//! The frame callback re-requests itself after every tick until
//! [`AnimationLoop::stop`] is called (or the loop is dropped), at which point
//! the pending frame is cancelled and the closure is released.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

type FrameClosure = Closure<dyn FnMut(f64)>;

struct LoopState {
    window: Window,
    running: Cell<bool>,
    pending: Cell<Option<i32>>,
    callback: RefCell<Option<FrameClosure>>,
}

impl LoopState {
    fn request(&self) -> Result<(), JsValue> {
        if let Some(cb) = self.callback.borrow().as_ref() {
            let id = self.window.request_animation_frame(cb.as_ref().unchecked_ref())?;
            self.pending.set(Some(id));
        }
        Ok(())
    }
}

pub struct AnimationLoop {
    state: Rc<LoopState>,
}

impl AnimationLoop {
    /// Start calling `tick(timestamp)` once per display refresh.
    pub fn start<F>(window: &Window, mut tick: F) -> Result<Self, JsValue>
    where
        F: FnMut(f64) + 'static,
    {
        let state = Rc::new(LoopState {
            window: window.clone(),
            running: Cell::new(true),
            pending: Cell::new(None),
            callback: RefCell::new(None),
        });

        // Weak: the closure lives inside the state it points back to
        let weak = Rc::downgrade(&state);
        let callback = Closure::<dyn FnMut(f64)>::wrap(Box::new(move |timestamp: f64| {
            let Some(state) = weak.upgrade() else { return };
            state.pending.set(None);
            if !state.running.get() {
                return;
            }

            tick(timestamp);

            if state.running.get() {
                if let Err(e) = state.request() {
                    log::warn!("animation loop stopped, next frame not scheduled: {:?}", e);
                    state.running.set(false);
                }
            }
        }));
        *state.callback.borrow_mut() = Some(callback);

        state.request()?;
        Ok(Self { state })
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    /// Cancel the pending frame; no further ticks are delivered.
    pub fn stop(&self) {
        self.state.running.set(false);
        if let Some(id) = self.state.pending.take() {
            let _ = self.state.window.cancel_animation_frame(id);
        }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
