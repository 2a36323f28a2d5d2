//! CodeVault: a password-gated, multi-tab code editor with live HTML preview.
//!
//! The `app` module holds all widget-free logic (tabs, file gateway, preview
//! debouncing, syntax highlighting, settings). The `ui` module builds the
//! FLTK widgets and translates user input into [`app::Message`]s; the binary
//! in `main.rs` runs the dispatch loop between the two.

pub mod app;
pub mod ui;
