//! # Ábaco Terminal Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Ábaco Terminal                                   │
//! │                                                                         │
//! │  stdin  "1 2 + 3 ="                                                     │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  lib.rs ─────► Sets up logging, config, session                        │
//! │    │                                                                    │
//! │  commands/ ──► press_key, get_display                                  │
//! │    │                                                                    │
//! │  state/ ─────► SessionState, ConfigState                               │
//! │    │                                                                    │
//! │  render.rs ──► two display lines (text) or one JSON object per key     │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  stdout                                  stderr: alerts, bell, logs     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration from the environment
//! 3. Create the session
//! 4. Read, dispatch, render until end of input

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The actual setup is in lib.rs for better testability
    abaco_cli_lib::run()?;
    Ok(())
}
