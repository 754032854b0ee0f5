//! # Session State
//!
//! Owns the calculator engine for one run of the app.
//!
//! ## Ownership
//! Input is processed one token at a time on a single thread, so the session
//! is owned by the run loop and lent to commands as `&mut`. No lock needed.
//!
//! ## Alerts
//! ```text
//! engine.evaluate()  ── DivisionByZero ──► AlertSink::on_error()
//!                                                │ (queued)
//!                                                ▼
//! press_key() ◄──────────── session.take_alert() ◄┘
//!     │
//!     ▼
//! KeypadResponse { display, alert: Some(ApiError { DIVISION_BY_ZERO, .. }) }
//! ```

use abaco_core::{CalculatorEngine, CoreError, DisplaySnapshot, EventSink};
use tracing::debug;

use crate::error::ApiError;

/// Event sink that queues user-facing errors until a command collects them.
#[derive(Debug, Default)]
pub struct AlertSink {
    pending: Option<ApiError>,
    results: u64,
}

impl EventSink for AlertSink {
    fn on_error(&mut self, error: &CoreError) {
        self.pending = Some(ApiError::from(error.clone()));
    }

    fn on_result(&mut self, value: f64) {
        self.results += 1;
        debug!(value, count = self.results, "result computed");
    }
}

/// The calculator session.
#[derive(Debug)]
pub struct SessionState {
    engine: CalculatorEngine<AlertSink>,
}

impl SessionState {
    /// Creates a session with a cleared engine.
    pub fn new() -> Self {
        SessionState {
            engine: CalculatorEngine::with_sink(AlertSink::default()),
        }
    }

    /// Read access to the engine.
    pub fn engine(&self) -> &CalculatorEngine<AlertSink> {
        &self.engine
    }

    /// Write access to the engine.
    pub fn engine_mut(&mut self) -> &mut CalculatorEngine<AlertSink> {
        &mut self.engine
    }

    /// Current display projection.
    pub fn snapshot(&self) -> DisplaySnapshot {
        self.engine.snapshot()
    }

    /// Takes the alert raised since the last call, if any.
    pub fn take_alert(&mut self) -> Option<ApiError> {
        self.engine.sink_mut().pending.take()
    }

    /// Number of results computed in this session.
    pub fn results_computed(&self) -> u64 {
        self.engine.sink().results
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
