//! # Renderer
//!
//! Draws command responses to the terminal.
//!
//! ## Output Streams
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdout (display only, safe to pipe)                                    │
//! │    text:  "1234 + 5.678,9"        ◄── secondary                         │
//! │           "5.678,9"               ◄── primary (+ size hint if not       │
//! │                                        default, e.g. "  (small)")      │
//! │    json:  {"primary":"5.678,9","secondary":"1234 + 5.678,9",...}       │
//! │                                                                         │
//! │  stderr                                                                 │
//! │    alerts   "ERROR: Division by zero is not possible"   (text mode)    │
//! │    errors   "Unknown key: \"MR\""                       (text mode)    │
//! │    bell     '\x07' per key press when sound is enabled                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::Write;

use abaco_core::{DisplaySnapshot, FontScale};
use serde::Serialize;

use crate::commands::keypad::KeypadResponse;
use crate::error::{ApiError, AppError};
use crate::state::{ConfigState, OutputMode};

/// Terminal bell, the audio feedback for a key press.
const BELL: &str = "\x07";

#[derive(Serialize)]
struct ErrorEnvelope<'a> {
    error: &'a ApiError,
}

/// Writes responses in the configured output mode.
#[derive(Debug)]
pub struct Renderer<W: Write, E: Write> {
    config: ConfigState,
    out: W,
    err: E,
}

impl<W: Write, E: Write> Renderer<W, E> {
    /// Creates a renderer over a display stream and a diagnostics stream.
    pub fn new(config: ConfigState, out: W, err: E) -> Self {
        Renderer { config, out, err }
    }

    /// Draws the response to one key press.
    pub fn render(&mut self, response: &KeypadResponse) -> Result<(), AppError> {
        if self.config.sound_enabled {
            write!(self.err, "{BELL}")?;
        }

        match self.config.output {
            OutputMode::Text => {
                if let Some(alert) = &response.alert {
                    writeln!(self.err, "ERROR: {}", alert.message)?;
                }
                self.write_text(&response.display)?;
            }
            OutputMode::Json => {
                serde_json::to_writer(&mut self.out, response)?;
                writeln!(self.out)?;
            }
        }

        Ok(())
    }

    /// Draws a display with no key press behind it (startup).
    pub fn render_display(&mut self, display: &DisplaySnapshot) -> Result<(), AppError> {
        match self.config.output {
            OutputMode::Text => self.write_text(display)?,
            OutputMode::Json => {
                serde_json::to_writer(&mut self.out, display)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    /// Reports a failed command.
    pub fn render_error(&mut self, error: &ApiError) -> Result<(), AppError> {
        match self.config.output {
            OutputMode::Text => writeln!(self.err, "{}", error.message)?,
            OutputMode::Json => {
                serde_json::to_writer(&mut self.out, &ErrorEnvelope { error })?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    /// Prints the input prompt (text mode only).
    pub fn prompt(&mut self) -> Result<(), AppError> {
        if self.config.output == OutputMode::Text && !self.config.prompt.is_empty() {
            write!(self.out, "{}", self.config.prompt)?;
            self.out.flush()?;
        }
        Ok(())
    }

    /// Gives back the underlying streams.
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }

    fn write_text(&mut self, display: &DisplaySnapshot) -> Result<(), AppError> {
        writeln!(self.out, "{}", display.secondary)?;
        match scale_label(display.font_scale) {
            Some(label) => writeln!(self.out, "{}  ({label})", display.primary)?,
            None => writeln!(self.out, "{}", display.primary)?,
        }
        Ok(())
    }
}

fn scale_label(scale: FontScale) -> Option<&'static str> {
    match scale {
        FontScale::Default => None,
        FontScale::Medium => Some("medium"),
        FontScale::Small => Some("small"),
    }
}
