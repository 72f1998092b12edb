//! Error type for mounting the hero effects.
//!
//! Missing optional DOM elements are not errors; they are skipped. This type
//! only covers the cases where the browser environment itself is unusable or
//! the caller passed a broken config.

use std::fmt;

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum MountError {
    /// No global `window` (e.g. running inside a worker).
    NoWindow,
    /// `window.document` is missing.
    NoDocument,
    /// A web-sys call threw.
    Js(String),
    /// The config object could not be parsed or failed validation.
    BadConfig(String),
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountError::NoWindow => write!(f, "no global `window` exists"),
            MountError::NoDocument => write!(f, "window has no document"),
            MountError::Js(msg) => write!(f, "DOM call failed: {}", msg),
            MountError::BadConfig(msg) => write!(f, "invalid particle config: {}", msg),
        }
    }
}

impl std::error::Error for MountError {}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        MountError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
