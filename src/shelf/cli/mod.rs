//! Terminal client for the shelf library.
//!
//! - `setup.rs`: clap argument definitions
//! - `commands.rs`: context wiring and command handlers
//! - `browse.rs`: the line-oriented interactive session
//! - `render.rs`, `styles.rs`, `templates.rs`: template-based output

mod browse;
mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
