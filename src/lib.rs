//! # instracore-ui
//!
//! Page behaviors for the server-rendered dashboard, compiled to WebAssembly.
//!
//! The templates ship plain markup; this crate adds sidebar collapse, the
//! footer year, a persisted dark-mode toggle, sidebar link highlighting,
//! Bootstrap tooltip/popover start-up with timed alert dismissal, and the
//! `confirmDelete` / `formatCurrency` / `formatDate` / `formatDateTime`
//! helpers that inline markup calls.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | [`controller::PageController`] and its setup routines |
//! | [`config`] | Element bindings and timings, loadable from JSON |
//! | [`settings`] | Settings store seam and [`settings::ThemeMode`] |
//! | [`page`] | DOM operations the controller relies on |
//! | [`widgets`] | Tooltip / popover / dismissal capability |
//! | [`format`] | Currency and date formatting |
//! | [`confirm`] | Delete confirmation prompt |
//! | [`consts`] | Default DOM contract, storage values, timings |
//! | [`error`] | [`error::PageError`] |
//! | `browser` | web-sys adapters and the wasm entry point (`hydrate` feature) |
//!
//! Everything except `browser` is plain Rust and runs natively under
//! `cargo test`.

pub mod config;
pub mod confirm;
pub mod consts;
pub mod controller;
pub mod error;
pub mod format;
pub mod page;
pub mod settings;
pub mod widgets;

#[cfg(feature = "hydrate")]
pub mod browser;

#[cfg(test)]
mod fakes;
