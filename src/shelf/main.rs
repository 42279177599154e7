//! # Shelf CLI
//!
//! The binary is thin: the client lives in `cli/`, while this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/shelf/cli/)                                 │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring and command handlers (commands.rs)        │
//! │  - Interactive session (browse.rs)                          │
//! │  - Terminal rendering via minijinja templates (render.rs)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Session state, selection events, refresh, expand         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors bubble up as `ShelfError` and are printed once here, followed by a
//! non-zero exit code.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
