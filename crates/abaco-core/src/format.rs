//! # Format Module
//!
//! Converts operand strings into display strings, and numeric results back
//! into operand strings.
//!
//! ## Display Style
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ONE FIXED STYLE                                                        │
//! │                                                                         │
//! │    operand "1234567.89"  ──►  display "1.234.567,89"                    │
//! │                                                                         │
//! │    thousands separator:  '.'  (every 3 integer digits from the right)  │
//! │    decimal marker:       ','                                            │
//! │                                                                         │
//! │  The numeric value is never rounded or truncated. Formatting is a      │
//! │  pure string transform over what the user typed.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use abaco_core::format::NumberFormatter;
//!
//! assert_eq!(NumberFormatter::format("1234567"), "1.234.567");
//! assert_eq!(NumberFormatter::format("-1234.5"), "-1.234,5");
//! assert_eq!(NumberFormatter::format(""), "");
//! ```

use crate::error::{CoreError, CoreResult};

/// Inserted between groups of three integer digits.
pub const GROUP_SEPARATOR: char = '.';

/// Replaces the `.` of the operand string in the display.
pub const DECIMAL_MARKER: char = ',';

// =============================================================================
// NumberFormatter
// =============================================================================

/// Display formatter for operand strings.
///
/// Stateless: the style is fixed, so every method is an associated function.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberFormatter;

impl NumberFormatter {
    /// Formats an operand string for display.
    ///
    /// ## Rules
    /// - `""` stays `""` (no operand typed yet)
    /// - The integer part is grouped by threes; a leading `-` is never grouped
    /// - A present `.` always becomes `,`, even with nothing after it
    ///
    /// ## Example
    /// ```rust
    /// use abaco_core::format::NumberFormatter;
    ///
    /// assert_eq!(NumberFormatter::format("1234567.89"), "1.234.567,89");
    /// assert_eq!(NumberFormatter::format("12."), "12,");
    /// assert_eq!(NumberFormatter::format("NaN"), "NaN");
    /// ```
    pub fn format(value: &str) -> String {
        if value.is_empty() {
            return String::new();
        }

        match value.split_once('.') {
            Some((integer, fraction)) => {
                let mut out = Self::group_thousands(integer);
                out.push(DECIMAL_MARKER);
                out.push_str(fraction);
                out
            }
            None => Self::group_thousands(value),
        }
    }

    /// Groups the digits of an integer part by threes, counting from the right.
    ///
    /// Anything that is not `[-]digits` (`NaN`, `Infinity`) is returned as is.
    fn group_thousands(integer: &str) -> String {
        let (sign, digits) = match integer.strip_prefix('-') {
            Some(digits) => ("-", digits),
            None => ("", integer),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return integer.to_string();
        }

        let mut out = String::with_capacity(integer.len() + digits.len() / 3);
        out.push_str(sign);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(GROUP_SEPARATOR);
            }
            out.push(ch);
        }
        out
    }
}

// =============================================================================
// Operand <-> f64
// =============================================================================

/// Parses an operand string into a number.
///
/// Accepts what the engine can hold: typed numerals (`"12."`, `"-0.5"`) and
/// stringified results (`"NaN"`, `"Infinity"`, `"-Infinity"`).
///
/// ## Errors
/// [`CoreError::InvalidOperand`] for anything else, including `""` and `"-"`.
pub fn parse_operand(operand: &str) -> CoreResult<f64> {
    operand
        .parse::<f64>()
        .map_err(|_| CoreError::InvalidOperand {
            operand: operand.to_string(),
        })
}

/// Stringifies a result so it can become the next current operand.
///
/// ## Rules
/// ```text
/// NaN        → "NaN"
/// ±∞         → "Infinity" / "-Infinity"
/// -0.0       → "0"
/// 5.0        → "5"       (no trailing ".0")
/// 0.1 + 0.2  → "0.30000000000000004"  (shortest round-trip, no exponent)
/// ```
///
/// ## Example
/// ```rust
/// use abaco_core::format::operand_from_f64;
///
/// assert_eq!(operand_from_f64(220.0), "220");
/// assert_eq!(operand_from_f64(-0.0), "0");
/// assert_eq!(operand_from_f64(f64::NAN), "NaN");
/// ```
pub fn operand_from_f64(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        // Covers -0.0 as well.
        "0".to_string()
    } else {
        value.to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
