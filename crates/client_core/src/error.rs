//! Unified error rendered into the error region.

use shared::error::ErrorPayload;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DisplayError {
    /// Backend answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// Network failure or a body that could not be read as a prediction.
    #[error("{0}")]
    Transport(String),
}

impl DisplayError {
    pub fn rejected(status: u16, payload: &ErrorPayload) -> Self {
        Self::Rejected {
            status,
            message: payload.message_or_fallback(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Rejected { message, .. } => message,
            Self::Transport(message) => message,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport(_) => None,
        }
    }

    /// Text written into the error region.
    pub fn render(&self) -> String {
        format!("Error: {}", self.message())
    }
}

impl From<reqwest::Error> for DisplayError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
