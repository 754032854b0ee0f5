//! # Error Types
//!
//! Domain-specific error types for abaco-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  abaco-core errors (this file)                                         │
//! │  └── CoreError        - Engine and key classification failures         │
//! │                                                                         │
//! │  abaco-cli errors (app)                                                │
//! │  ├── ApiError         - What the renderer sees (code + message)        │
//! │  └── ConfigError      - Bad environment values                         │
//! │                                                                         │
//! │  Flow: CoreError → ApiError → Renderer                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Leniency
//! Only [`CoreError::DivisionByZero`] is user-facing. A second decimal point,
//! a leading zero or an operator with nothing typed are absorbed as no-ops by
//! the engine and never become errors.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Calculator errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// `/` was evaluated with a current operand equal to zero.
    ///
    /// ## User Workflow
    /// ```text
    /// 10  /  0  =
    ///            │
    ///            ▼
    /// EventSink::on_error(DivisionByZero) ──► renderer shows an alert
    ///            │
    ///            ▼
    /// engine resets to "0" / "" / no operator
    /// ```
    #[error("Division by zero is not possible")]
    DivisionByZero,

    /// An operand string reached evaluation (or sign toggle) without being
    /// a number, e.g. `"-"` left behind by backspacing `"-5"`.
    #[error("Operand '{operand}' is not a number")]
    InvalidOperand { operand: String },

    /// A character other than `0-9` or `.` was passed to digit entry.
    #[error("Invalid entry token: {0:?}")]
    InvalidToken(char),

    /// A raw keypad token could not be classified.
    #[error("Unknown key: {0:?}")]
    UnknownKey(String),
}

impl CoreError {
    /// Whether the error should be surfaced to the user.
    ///
    /// The other variants are invariant violations or dispatcher mistakes
    /// that renderers log instead of showing.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, CoreError::DivisionByZero)
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
