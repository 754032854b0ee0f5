//! # Domain Types
//!
//! Core domain types used throughout Ábaco.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Operator     │   │       Key       │   │   FontScale     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  + - * / % ^ √  │   │  Digit / Point  │   │  Default 2.8rem │       │
//! │  │  is_unary()     │   │  Operator       │   │  Medium  2.0rem │       │
//! │  │  apply()        │   │  Equals / Clear │   │  Small   1.0rem │       │
//! │  └─────────────────┘   │  Backspace      │   └─────────────────┘       │
//! │                        │  ToggleSign     │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;
use crate::{MEDIUM_FONT_THRESHOLD, SMALL_FONT_THRESHOLD};

// =============================================================================
// Operator
// =============================================================================

/// An arithmetic operator selectable on the keypad.
///
/// Serialized as its keypad symbol so renderers can print it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    /// Percentage-add: `prev + prev * current / 100`. Not modulo.
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "^")]
    Power,
    /// Square root of the previous operand. The current operand is ignored.
    #[serde(rename = "√")]
    SquareRoot,
}

impl Operator {
    /// Every operator, in keypad order.
    pub const ALL: [Operator; 7] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Percent,
        Operator::Power,
        Operator::SquareRoot,
    ];

    /// Returns the keypad symbol.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Percent => "%",
            Operator::Power => "^",
            Operator::SquareRoot => "√",
        }
    }

    /// Looks up an operator by its keypad symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Operator::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Whether the operator only reads the previous operand.
    ///
    /// Unary operators are still selected like binary ones; evaluation just
    /// never looks at the current operand.
    #[inline]
    pub const fn is_unary(&self) -> bool {
        matches!(self, Operator::SquareRoot)
    }

    /// Applies the operator.
    ///
    /// `current` is ignored for unary operators. No guard is applied here:
    /// `x / 0.0` is infinite and `√` of a negative is `NaN`. Division by zero
    /// is intercepted by the engine before this is reached.
    ///
    /// ## Example
    /// ```rust
    /// use abaco_core::Operator;
    ///
    /// assert_eq!(Operator::Percent.apply(200.0, 10.0), 220.0);
    /// assert_eq!(Operator::SquareRoot.apply(9.0, 123.0), 3.0);
    /// ```
    pub fn apply(&self, prev: f64, current: f64) -> f64 {
        match self {
            Operator::Add => prev + current,
            Operator::Subtract => prev - current,
            Operator::Multiply => prev * current,
            Operator::Divide => prev / current,
            Operator::Percent => prev + (prev * current) / 100.0,
            Operator::Power => prev.powf(current),
            Operator::SquareRoot => prev.sqrt(),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// =============================================================================
// Key
// =============================================================================

/// A classified keypad press.
///
/// ## Token Table
/// ```text
/// "0".."9"           → Digit
/// "."                → Point
/// "+ - * / % ^ √"    → Operator      (aliases: "x" → *, "sqrt" → √)
/// "="                → Equals
/// "C"                → Clear         (alias: "c")
/// "«"                → Backspace     (aliases: "<", "backspace")
/// "+/-"              → ToggleSign
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(char),
    Point,
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
    ToggleSign,
}

impl FromStr for Key {
    type Err = CoreError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();

        let key = match token {
            "." => Key::Point,
            "=" => Key::Equals,
            "C" | "c" => Key::Clear,
            "«" | "<" | "backspace" => Key::Backspace,
            "+/-" => Key::ToggleSign,
            "x" => Key::Operator(Operator::Multiply),
            "sqrt" => Key::Operator(Operator::SquareRoot),
            _ => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(d), None) if d.is_ascii_digit() => Key::Digit(d),
                    _ => Operator::from_symbol(token)
                        .map(Key::Operator)
                        .ok_or_else(|| CoreError::UnknownKey(token.to_string()))?,
                }
            }
        };

        Ok(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Digit(d) => write!(f, "{d}"),
            Key::Point => f.write_str("."),
            Key::Operator(op) => write!(f, "{op}"),
            Key::Equals => f.write_str("="),
            Key::Clear => f.write_str("C"),
            Key::Backspace => f.write_str("«"),
            Key::ToggleSign => f.write_str("+/-"),
        }
    }
}

// =============================================================================
// Font Scale
// =============================================================================

/// Presentation hint for the primary display.
///
/// Derived from the length of the unformatted current operand so the number
/// keeps fitting as it grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FontScale {
    /// Up to 10 characters.
    #[default]
    Default,
    /// 11 to 14 characters.
    Medium,
    /// 15 characters or more.
    Small,
}

impl FontScale {
    /// Picks the scale for an unformatted operand.
    pub fn for_operand(operand: &str) -> Self {
        let len = operand.chars().count();
        if len > SMALL_FONT_THRESHOLD {
            FontScale::Small
        } else if len > MEDIUM_FONT_THRESHOLD {
            FontScale::Medium
        } else {
            FontScale::Default
        }
    }

    /// Font size in rem for the browser renderer.
    pub const fn rem(&self) -> f32 {
        match self {
            FontScale::Default => 2.8,
            FontScale::Medium => 2.0,
            FontScale::Small => 1.0,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
