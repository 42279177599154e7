//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept as standalone
//! files, embedded here at compile time.
//!
//! Templates are rendered with `trim_blocks` and `lstrip_blocks`, so block
//! tags (`{% for %}`, `{% if %}`) sit on their own lines without leaking
//! blank lines into the output. Layout math (widths, padding) happens in
//! Rust; templates only place values and pick styles.

pub const CATALOG_TEMPLATE: &str = include_str!("templates/catalog.tmp");
pub const DETAILS_TEMPLATE: &str = include_str!("templates/details.tmp");
pub const OPTIONS_TEMPLATE: &str = include_str!("templates/options.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
