//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with the host platform without
//! depending on concrete implementations.

pub mod platform;
pub mod platform_port;

pub use platform::{
    storage_keys, DocumentProvider, SleepProvider, StorageEventsProvider, StorageProvider,
    PAGE_SCROLL_ID,
};
pub use platform_port::PlatformPort;
