//! # abaco-core: Pure Calculator Logic for Ábaco
//!
//! This crate is the **heart** of Ábaco. It holds the keypad calculator's
//! state machine and number formatting with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Ábaco Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Renderer (terminal app, browser)                   │   │
//! │  │    raw token ──► Key ──► one engine call ──► DisplaySnapshot    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ abaco-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  format   │  │  engine   │  │  display  │  │   │
//! │  │   │ Operator  │  │ Number-   │  │Calculator-│  │ Display-  │  │   │
//! │  │   │ Key       │  │ Formatter │  │ Engine    │  │ Snapshot  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TERMINAL • NO DOM • PURE STATE TRANSITIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Operator, Key, FontScale
//! - [`format`] - Display formatting and operand stringification
//! - [`engine`] - The calculator state machine
//! - [`display`] - What renderers draw
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Explicit Sessions**: State lives in a [`CalculatorEngine`] value, never in globals
//! 2. **String Operands**: Operands stay strings until evaluation, so `"12."` can be shown
//! 3. **Lenient Entry**: Malformed key sequences are absorbed as no-ops
//! 4. **Fail Safe**: Division by zero reports, then resets the engine
//!
//! ## Example Usage
//!
//! ```rust
//! use abaco_core::{CalculatorEngine, Key};
//!
//! let mut engine = CalculatorEngine::new();
//! for token in ["2", "0", "0", "%", "1", "0", "="] {
//!     let key: Key = token.parse().unwrap();
//!     engine.press(key).unwrap();
//! }
//!
//! // 200 + 200 * 10 / 100
//! assert_eq!(engine.primary_display(), "220");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod display;
pub mod engine;
pub mod error;
pub mod format;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use display::DisplaySnapshot;
pub use engine::{CalculatorEngine, EventSink, SilentSink};
pub use error::{CoreError, CoreResult};
pub use format::NumberFormatter;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Value of the current operand after construction, clear and backspacing
/// everything away.
pub const INITIAL_OPERAND: &str = "0";

/// Operands longer than this many characters get [`FontScale::Medium`].
pub const MEDIUM_FONT_THRESHOLD: usize = 10;

/// Operands longer than this many characters get [`FontScale::Small`].
pub const SMALL_FONT_THRESHOLD: usize = 14;
