use grabscroll_ui::ConfigError;
use std::fmt;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum WebError {
    NoWindow,
    NoDocument,
    NoPerformance,
    /// A DOM call failed; carries the JavaScript error as text.
    Js(String),
    Config(ConfigError),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::NoWindow => write!(f, "no global window exists"),
            WebError::NoDocument => write!(f, "window has no document"),
            WebError::NoPerformance => write!(f, "window has no performance timer"),
            WebError::Js(message) => write!(f, "DOM call failed: {message}"),
            WebError::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WebError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        WebError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<ConfigError> for WebError {
    fn from(err: ConfigError) -> Self {
        WebError::Config(err)
    }
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
