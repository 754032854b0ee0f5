//! # Ábaco Terminal Library
//!
//! Core library for the Ábaco terminal app: the dispatcher and renderer
//! collaborators around `abaco-core`.
//!
//! ## Module Organization
//! ```text
//! abaco_cli_lib/
//! ├── lib.rs          ◄─── You are here (setup & run loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Calculator session + alert sink
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   └── keypad.rs   ◄─── Key press / display commands
//! ├── render.rs       ◄─── Text / JSON output
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Input
//! Tokens are separated by whitespace. A word that is not a key on its own
//! is split into single characters, so `12+3=` and `1 2 + 3 =` are the same.
//! Multi-character keys (`+/-`, `sqrt`, `backspace`) need their own word.

pub mod commands;
pub mod error;
pub mod render;
pub mod state;

use std::io::{self, BufRead, Write};

use abaco_core::Key;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use commands::keypad::{get_display, press_key};
use error::AppError;
use render::Renderer;
use state::{ConfigState, SessionState};

/// Runs the terminal app on stdin / stdout / stderr.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: WARN (abaco crates: INFO), override with RUST_LOG        │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • ABACO_OUTPUT, ABACO_SOUND, ABACO_PROMPT                           │
/// │                                                                         │
/// │  3. Run Loop ─────────────────────────────────────────────────────────► │
/// │     • Show the initial "0"                                              │
/// │     • Per token: press_key → render                                     │
/// │     • Ends at end of input                                              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), AppError> {
    init_tracing();

    let config = ConfigState::from_env()?;
    info!(config = ?config, "Starting Ábaco");

    let stdin = io::stdin();
    let session = run_with(config, stdin.lock(), io::stdout().lock(), io::stderr())?;

    info!(results = session.results_computed(), "Session ended");
    Ok(())
}

/// Runs the read → dispatch → render loop over arbitrary streams.
///
/// Returns the session as it was when input ran out.
pub fn run_with<R, W, E>(
    config: ConfigState,
    input: R,
    out: W,
    err: E,
) -> Result<SessionState, AppError>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut session = SessionState::new();
    let mut renderer = Renderer::new(config, out, err);

    renderer.render_display(&get_display(&session))?;
    renderer.prompt()?;

    for line in input.lines() {
        let line = line?;
        for token in tokens(&line) {
            match press_key(&mut session, &token) {
                Ok(response) => renderer.render(&response)?,
                Err(api_err) => {
                    warn!(token = %token, error = %api_err, "key rejected");
                    renderer.render_error(&api_err)?;
                }
            }
        }
        renderer.prompt()?;
    }

    Ok(session)
}

/// Splits an input line into keypad tokens.
fn tokens(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for word in line.split_whitespace() {
        if word.parse::<Key>().is_ok() {
            tokens.push(word.to_string());
        } else {
            tokens.extend(word.chars().map(String::from));
        }
    }
    tokens
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every command and engine transition
/// - `RUST_LOG=abaco_core=trace` - Also show absorbed no-op keys
/// - Default: WARN, INFO for the abaco crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,abaco_core=info,abaco_cli_lib=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
