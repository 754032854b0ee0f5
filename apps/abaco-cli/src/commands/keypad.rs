//! # Keypad Commands
//!
//! One command per thing a renderer can ask of the session.
//!
//! ## Key Press Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    press_key("√")                                       │
//! │                                                                         │
//! │  1. Classify token ───────► Key::Operator(SquareRoot)                  │
//! │           │                   (unknown token → ApiError INVALID_INPUT) │
//! │           ▼                                                             │
//! │  2. Exactly one engine operation                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  3. Collect alert raised through the sink (division by zero)           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  4. Return { primary, secondary, fontScale, alert? }                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use abaco_core::{DisplaySnapshot, Key};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::SessionState;

/// Display after a command, plus any alert it raised.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeypadResponse {
    #[serde(flatten)]
    pub display: DisplaySnapshot,

    /// User-facing alert (division by zero)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub alert: Option<ApiError>,
}

impl KeypadResponse {
    fn collect(session: &mut SessionState) -> Self {
        KeypadResponse {
            alert: session.take_alert(),
            display: session.snapshot(),
        }
    }
}

/// Classifies a raw token and applies it to the session.
///
/// ## Behavior
/// - Division by zero is not an error here: the engine has already reset
///   and the alert rides along in the response
/// - Unknown tokens and unusable operands fail without touching the display
///
/// ## Arguments
/// * `token` - Raw keypad token (`"7"`, `"+"`, `"="`, `"«"`, `"+/-"`, ...)
pub fn press_key(session: &mut SessionState, token: &str) -> Result<KeypadResponse, ApiError> {
    debug!(token = %token, "press_key command");

    let key: Key = token.parse()?;
    match session.engine_mut().press(key) {
        Ok(()) => {}
        Err(err) if err.is_user_facing() => {
            debug!(error = %err, "reported through alert");
        }
        Err(err) => return Err(err.into()),
    }

    Ok(KeypadResponse::collect(session))
}

/// Gets the current display without changing anything.
pub fn get_display(session: &SessionState) -> DisplaySnapshot {
    debug!("get_display command");
    session.snapshot()
}
