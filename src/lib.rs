//! Hero-section enhancements for a static landing page, compiled to WASM:
//! the mobile `--vh` fix, the hamburger menu toggle and the animated
//! particle background.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod constants;
pub mod dom_utils;
pub mod error;
pub mod logging;
pub mod particles;
pub mod ui;

pub use config::FieldConfig;
pub use error::MountError;
pub use particles::{mount_particles, ParticleHandle};

// Main entry point for the WASM module
#[cfg(feature = "autostart")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    boot()
}

/// Wire everything on the current page.  Called automatically on module load
/// with the `autostart` feature; exported for pages that build without it.
#[wasm_bindgen]
pub fn boot() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();
    logging::init(log::Level::Info);

    let window = dom_utils::window()?;
    let document = dom_utils::document(&window)?;

    ui::viewport::install(&window)?;

    let doc = document.clone();
    dom_utils::on_dom_ready(&document, move || {
        if let Err(e) = ui::nav_menu::setup(&doc) {
            log::warn!("navigation menu wiring failed: {:?}", e);
        }
        particles::autostart();
    })?;

    Ok(())
}
