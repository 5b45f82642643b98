use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum BrowserError {
    #[error("no window object in this environment")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("IntersectionObserver is not supported")]
    IntersectionObserverUnavailable,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for BrowserError {
    fn from(value: JsValue) -> Self {
        BrowserError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
