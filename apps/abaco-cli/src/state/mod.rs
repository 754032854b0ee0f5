//! # State Module
//!
//! Manages application state for the terminal app.
//!
//! ## Why Separate State Types?
//! Commands declare exactly what state they need: keypad commands take the
//! session, the renderer takes the config.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────────────────────────┐                      │
//! │          │             run loop                  │                      │
//! │          └──────────┬───────────────────┬────────┘                      │
//! │                     ▼                   ▼                               │
//! │  ┌──────────────────────────┐  ┌──────────────────────┐                │
//! │  │      SessionState        │  │     ConfigState      │                │
//! │  │                          │  │                      │                │
//! │  │  CalculatorEngine        │  │  output mode         │                │
//! │  │  + AlertSink             │  │  sound_enabled       │                │
//! │  │  (owned, &mut to cmds)   │  │  prompt              │                │
//! │  └──────────────────────────┘  └──────────────────────┘                │
//! │                                                                         │
//! │  ConfigState is read-only after initialization.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{ConfigError, ConfigState, OutputMode};
pub use session::{AlertSink, SessionState};
