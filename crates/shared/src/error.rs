use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong.";

/// Body returned by the scoring endpoint alongside a non-success status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl ErrorPayload {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: Some(Value::String(message.into())),
        }
    }

    /// Empty, zero, false and null messages count as absent; other
    /// non-string values are shown as their JSON text.
    pub fn message_or_fallback(&self) -> String {
        match &self.error {
            None | Some(Value::Null) | Some(Value::Bool(false)) => {
                FALLBACK_ERROR_MESSAGE.to_string()
            }
            Some(Value::String(message)) if message.is_empty() => {
                FALLBACK_ERROR_MESSAGE.to_string()
            }
            Some(Value::Number(number)) if number.as_f64() == Some(0.0) => {
                FALLBACK_ERROR_MESSAGE.to_string()
            }
            Some(Value::String(message)) => message.clone(),
            Some(other) => other.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldParseError {
    #[error("expected NAME=VALUE, got '{0}'")]
    MissingSeparator(String),
    #[error("field name is empty in '{0}'")]
    EmptyName(String),
}
