use std::fmt::{Display, Formatter};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum ThemeError {
    /// The indicator element with the given id is not in the document.
    MissingIndicator(String),
    Storage(String),
    Dom(String),
    Adapter(String),
    Config(String),
}

impl Display for ThemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::MissingIndicator(id) => write!(f, "Missing indicator element: #{}", id),
            ThemeError::Storage(msg) => write!(f, "Storage Error: {}", msg),
            ThemeError::Dom(msg) => write!(f, "DOM Error: {}", msg),
            ThemeError::Adapter(msg) => write!(f, "Settings Adapter Error: {}", msg),
            ThemeError::Config(msg) => write!(f, "Configuration Error: {}", msg),
        }
    }
}

impl std::error::Error for ThemeError {}

impl From<std::io::Error> for ThemeError {
    fn from(error: std::io::Error) -> Self {
        ThemeError::Storage(error.to_string())
    }
}

impl From<serde_json::Error> for ThemeError {
    fn from(error: serde_json::Error) -> Self {
        ThemeError::Storage(error.to_string())
    }
}

// Browser storage throws on quota or security errors.
impl From<JsValue> for ThemeError {
    fn from(value: JsValue) -> Self {
        ThemeError::Storage(describe_js(&value))
    }
}

impl From<ThemeError> for JsValue {
    fn from(err: ThemeError) -> JsValue {
        js_sys::Error::new(&err.to_string()).into()
    }
}

pub(crate) fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
