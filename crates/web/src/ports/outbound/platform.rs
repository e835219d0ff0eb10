//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. Application/presentation code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with mock implementations
//!
//! NOTE: The `Platform` struct (DI container) that aggregates these traits
//! lives in `state/platform.rs`, not here. Ports layer contains only trait
//! definitions.

use std::{future::Future, pin::Pin};

use futures_channel::mpsc::UnboundedReceiver;

/// Async sleep abstraction
///
/// Used to avoid `#[cfg]` branches in UI code (assistant reply delays,
/// notice auto-dismiss).
pub trait SleepProvider: Clone + 'static {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

/// Persistent storage abstraction (localStorage/file-based)
pub trait StorageProvider: Clone + 'static {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Notifications about storage writes made outside this app instance
/// (another browser tab, for example)
pub trait StorageEventsProvider: Clone + 'static {
    /// Receiver yielding the key of every externally changed entry.
    ///
    /// Platforms without such notifications return a receiver that is
    /// already closed.
    fn subscribe(&self) -> UnboundedReceiver<String>;
}

/// Browser document operations (page title, scroll position)
pub trait DocumentProvider: Clone + 'static {
    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);

    /// Scroll the page container back to the top
    fn scroll_to_top(&self);
}

/// Storage key constants
///
/// These are kept in the ports layer as they define the contract for
/// what keys are used across the application.
pub mod storage_keys {
    pub const AUTH_TOKEN: &str = "adgorithm_auth_token";
    pub const ROLE: &str = "adgorithm_role";

    /// Keys whose external change affects the session
    pub const SESSION_KEYS: &[&str] = &[AUTH_TOKEN, ROLE];
}

/// Id of the scrollable element wrapping every page
pub const PAGE_SCROLL_ID: &str = "page-scroll";
