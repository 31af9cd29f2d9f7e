//! Layout Lab Library
//!
//! Core of the responsive-design playground: the layout preset catalog,
//! the persisted custom layouts, preview rendering, the code edit flow and
//! the session state that ties them together. The terminal UI and the
//! preview server are optional front ends behind the `ratatui` and `web`
//! features.

// Module declarations
pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod constants;
pub mod editor;
pub mod models;
pub mod notify;
pub mod preview;
pub mod session;
pub mod store;

#[cfg(feature = "ratatui")]
pub mod tui;

#[cfg(feature = "web")]
pub mod web;
