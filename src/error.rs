//! Error types for the pointer layer.
//!
//! Nothing here ever reaches the user. Errors are logged at the component
//! boundary and the affected feature degrades quietly.

use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, CursorError>;

#[derive(Error, Debug)]
pub enum CursorError {
    /// Not running in a browser main thread
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    /// A NodeRef that should hold the given element is not attached yet
    #[error("element not mounted: {0}")]
    NotMounted(&'static str),

    /// Exception thrown by a DOM call
    #[error("javascript error: {0}")]
    Js(String),

    #[error("invalid cursor config: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}

impl From<JsValue> for CursorError {
    fn from(value: JsValue) -> Self {
        let text = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{value:?}"));
        CursorError::Js(text)
    }
}
