//! # Display Module
//!
//! The read-only projection a renderer draws after every operation.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ 1234 + 5.678,9               │  ◄── secondary
//! │                      5.678,9 │  ◄── primary (sized by font_scale)
//! └──────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::FontScale;

/// Both display lines plus the sizing hint.
///
/// ## Serialization
/// ```json
/// { "primary": "5.678,9", "secondary": "1234 + 5.678,9", "fontScale": "default" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySnapshot {
    /// Formatted current operand.
    pub primary: String,

    /// `previous operator current`, current formatted.
    pub secondary: String,

    /// Size tier for the primary line.
    pub font_scale: FontScale,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CalculatorEngine;

    #[test]
    fn test_snapshot_json_shape() {
        let mut engine = CalculatorEngine::new();
        for d in ['1', '2', '3', '4'] {
            engine.append_digit_or_point(d).unwrap();
        }

        let json = serde_json::to_value(engine.snapshot()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "primary": "1.234",
                "secondary": "  1.234",
                "fontScale": "default"
            })
        );
    }
}
