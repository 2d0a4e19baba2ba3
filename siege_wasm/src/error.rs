//! Failures that stop the game from starting

use std::fmt;

use siege_core::ConfigError;
use wasm_bindgen::JsValue;

#[derive(Debug)]
pub enum SetupError {
    NoWindow,
    NoDocument,
    /// No element with this id in the page
    MissingElement(&'static str),
    /// The element exists but is not the expected kind
    WrongElement { id: &'static str, expected: &'static str },
    NoContext,
    /// The `data-config` attribute is not a playable game config
    Config(ConfigError),
    /// The browser refused an event listener or the first animation frame
    Browser(String),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::NoWindow => write!(f, "no global `window` exists"),
            SetupError::NoDocument => write!(f, "window has no document"),
            SetupError::MissingElement(id) => write!(f, "no element with id `{}`", id),
            SetupError::WrongElement { id, expected } => {
                write!(f, "element `{}` is not a {}", id, expected)
            }
            SetupError::NoContext => write!(f, "canvas has no 2d context"),
            SetupError::Config(e) => write!(f, "invalid game config: {}", e),
            SetupError::Browser(msg) => write!(f, "browser call failed: {}", msg),
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SetupError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for SetupError {
    fn from(e: ConfigError) -> Self {
        SetupError::Config(e)
    }
}

impl From<JsValue> for SetupError {
    fn from(value: JsValue) -> Self {
        SetupError::Browser(format!("{:?}", value))
    }
}

impl From<SetupError> for JsValue {
    fn from(e: SetupError) -> Self {
        js_sys::Error::new(&e.to_string()).into()
    }
}
