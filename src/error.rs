//! Errors raised while mounting the page into the browser document.
//!
//! Game rules never fail; only the DOM shell does.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("DOM call failed: {0}")]
    Dom(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PageError>;

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        let detail = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        PageError::Dom(detail)
    }
}

impl From<PageError> for JsValue {
    fn from(err: PageError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_piece() {
        assert_eq!(PageError::NoBody.to_string(), "document has no body");
        assert_eq!(
            PageError::Config("target_score must be at least 1".into()).to_string(),
            "invalid configuration: target_score must be at least 1"
        );
    }
}
