//! Animated, pointer-reactive particle field for the hero section.
//!
//! `field` and `render` are plain Rust and carry the interesting logic;
//! `surface`, `input`, `driver` and `handle` glue them to the browser.

pub mod driver;
pub mod field;
pub mod handle;
pub mod input;
pub mod particle;
pub mod render;
pub mod surface;
pub mod system;

use std::cell::RefCell;

use crate::config::FieldConfig;
use crate::constants::PARTICLE_CANVAS_ID;
use crate::dom_utils;

pub use field::{Bounds, ParticleField, Pointer};
pub use handle::{mount_particles, ParticleHandle};
pub use particle::Particle;

// We use thread_local because WASM runs in a single thread
thread_local! {
    static PAGE_FIELD: RefCell<Option<ParticleHandle>> = RefCell::new(None);
}

/// Page bootstrap: mount on `#particles` once layout has settled and keep the
/// handle alive for the page lifetime.
pub fn autostart() {
    let window = match dom_utils::window() {
        Ok(w) => w,
        Err(e) => {
            log::warn!("particle autostart skipped: {}", e);
            return;
        }
    };

    let win = window.clone();
    let scheduled = dom_utils::after_layout(&window, move || {
        let document = match dom_utils::document(&win) {
            Ok(d) => d,
            Err(e) => {
                log::warn!("particle autostart skipped: {}", e);
                return;
            }
        };
        match handle::mount(&win, &document, PARTICLE_CANVAS_ID, FieldConfig::default()) {
            Ok(Some(handle)) => PAGE_FIELD.with(|slot| {
                // Replacing an older handle stops it
                *slot.borrow_mut() = Some(handle);
            }),
            Ok(None) => {}
            Err(e) => log::warn!("particle field failed to mount: {}", e),
        }
    });
    if let Err(e) = scheduled {
        log::warn!("particle autostart could not be scheduled: {:?}", e);
    }
}
