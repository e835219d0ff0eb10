//! adgorithm web client.
//!
//! This crate contains UI, application logic, and platform adapters.
//! Multi-platform support (web, desktop) is provided via compile-time `cfg`
//! selection.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod state;
pub mod ui;

pub use ui::presentation;
pub use ui::routes;

// Re-export commonly used entrypoints
pub use ui::app;
pub use ui::{use_platform, Route, ShellKind};
