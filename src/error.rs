//! UI Errors
//!
//! Failures are collapsed at the edge: behaviors log them and leave the page
//! in its last confirmed state.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum UiError {
    /// Transport failure or a body that did not decode
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("DOM call failed: {0}")]
    Dom(String),

    #[error("no window or document available")]
    MissingWindow,
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T> = std::result::Result<T, UiError>;
