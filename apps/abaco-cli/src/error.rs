//! # API Error Type
//!
//! Unified error type for keypad commands, plus the app-level error that
//! ends a run.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Ábaco                                  │
//! │                                                                         │
//! │  token "foo"                                                            │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  press_key() ── CoreError::UnknownKey ──► ApiError { INVALID_INPUT }   │
//! │      │                                          │                       │
//! │      │                                          ▼                       │
//! │      │                                   renderer prints it, run goes  │
//! │      │                                   on with the next token        │
//! │      ▼                                                                  │
//! │  DivisionByZero is NOT a failed command: the engine already reset      │
//! │  itself and reported it through its sink, so the command succeeds      │
//! │  with an ApiError { DIVISION_BY_ZERO } attached as its alert.          │
//! │                                                                         │
//! │  AppError (I/O, config, JSON) ──► main() exits non-zero               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use abaco_core::CoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::ConfigError;

/// API error returned from keypad commands, or attached to a response as
/// its alert.
///
/// ## Serialization
/// What JSON output mode prints when a command fails:
/// ```json
/// {
///   "code": "INVALID_INPUT",
///   "message": "Unknown key: \"foo\""
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Division by zero; carried as an alert, the engine has reset
    DivisionByZero,

    /// The token or operand could not be used
    InvalidInput,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidInput, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::DivisionByZero => ApiError::new(ErrorCode::DivisionByZero, err.to_string()),
            CoreError::UnknownKey(_) | CoreError::InvalidToken(_) => {
                ApiError::invalid_input(err.to_string())
            }
            CoreError::InvalidOperand { ref operand } => {
                // Reachable only through odd key sequences; log the operand
                tracing::error!(operand = %operand, "operand does not parse");
                ApiError::invalid_input(err.to_string())
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Errors that end a run.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The environment holds an invalid configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A response could not be serialized.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
