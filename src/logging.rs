//! Browser console sink for the `log` facade.

use std::sync::Once;

use log::Level;
use wasm_bindgen::prelude::*;

static INIT: Once = Once::new();

/// Route `log` records to the browser console at `level`.  Only the first
/// call has any effect, so a level chosen earlier through
/// [`init_logging`] is not overwritten by the start-up default.
pub fn init(level: Level) {
    INIT.call_once(|| {
        if console_log::init_with_level(level).is_err() {
            web_sys::console::warn_1(&"hero-particles: a logger was already installed".into());
        }
        log::set_max_level(level.to_level_filter());
    });
}

/// Change the console log level from JS, e.g. `init_logging("debug")`.
/// Installs the console logger first if nothing did yet.
#[wasm_bindgen]
pub fn init_logging(level: &str) -> Result<(), JsValue> {
    let level: Level = level
        .parse()
        .map_err(|_| JsValue::from_str(&format!("unknown log level: {}", level)))?;
    init(level);
    log::set_max_level(level.to_level_filter());
    Ok(())
}
