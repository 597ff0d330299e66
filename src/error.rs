//! Start-up and configuration failures. Gameplay itself has no error states:
//! a missing hand or an exhausted pool are ordinary transitions.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("canvas unavailable: {0}")]
    Canvas(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("could not parse config: {0}")]
    ConfigParse(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for GameError {
    fn from(value: JsValue) -> Self {
        GameError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;
