//! # Commands Module
//!
//! Everything the run loop can ask of the app state.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! └── keypad.rs   ◄─── press_key, get_display
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Needs the session, mutably
//! fn press_key(session: &mut SessionState, token: &str)
//!
//! // Read-only
//! fn get_display(session: &SessionState)
//! ```

pub mod keypad;
