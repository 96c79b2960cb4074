//! Error types for noteguard-web

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors that can occur while binding controllers to the page
#[derive(Debug, Error)]
pub enum WebError {
    #[error("No global window object")]
    NoWindow,
    #[error("Window has no document")]
    NoDocument,
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
