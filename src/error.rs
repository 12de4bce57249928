use thiserror::Error;
use wasm_bindgen::JsValue;

/// Reasons the lightbox could not be attached to the page.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("invalid lightbox config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        MountError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
