use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures the page can run into while talking to the browser or the form endpoint.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PageError {
    #[error("no global window")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("DOM operation failed: {0}")]
    Dom(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("could not serialize structured data: {0}")]
    Serialize(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<gloo_net::Error> for PageError {
    fn from(err: gloo_net::Error) -> Self {
        PageError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for PageError {
    fn from(err: serde_json::Error) -> Self {
        PageError::Serialize(err.to_string())
    }
}
