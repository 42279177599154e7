//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic catalog browsing library**. The command-line client is one
//! consumer of it; the same core could sit behind a web page or a TUI.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns session state: store, selections, focus, mount      │
//! │  - Maps UI values (labels, "Todos") to typed selections     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (validity, filter, sort, query, render)               │
//! │  - Pure functions over slices, always returning new Vecs    │
//! │  - Render engine builds a DOM-like node tree                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ProductSource trait: HTTP, file, in-memory               │
//! │  - RecordStore: one cached snapshot per session             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! fetch → [`store::RecordStore`] → [`query::run_query`] (filter → sort) →
//! [`render::render`] (list → node tree) → [`render::MountPoint::expand`] on interaction.
//!
//! ## No Ambient State
//!
//! The record cache and the focus counter are plain values owned by
//! [`api::CatalogApi`] and passed by `&mut` into the core. Nothing in the core
//! keeps global state, so two sessions never interfere.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for a browsing session
//! - [`model`]: `Product` and the loosely typed `Scalar`
//! - [`validity`]: Price validity rules
//! - [`filter`]: Filter engine and `FilterSelection`
//! - [`sort`]: Sort engine and `SortStrategy`
//! - [`query`]: The query pipeline
//! - [`render`]: Render engine, display nodes, focus order, details
//! - [`store`]: Product sources and the record store
//! - [`reference`]: Known brands and product types
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod query;
pub mod reference;
pub mod render;
pub mod sort;
pub mod store;
pub mod validity;
