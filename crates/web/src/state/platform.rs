//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection container
//! that aggregates all platform-specific service implementations behind port traits.
//!
//! Usage:
//! - Created by `create_platform()` in `infrastructure/platform/desktop.rs` or
//!   `infrastructure/platform/wasm.rs`
//! - Injected into Dioxus context by the runner as `Arc<dyn PlatformPort>`
//! - Accessed in UI via `use_platform()`

use std::{future::Future, pin::Pin, sync::Arc};

use futures_channel::mpsc::UnboundedReceiver;

use crate::ports::outbound::{
    DocumentProvider, PlatformPort, SleepProvider, StorageEventsProvider, StorageProvider,
};

/// Unified platform services container
#[derive(Clone)]
pub struct Platform {
    sleep: Arc<dyn SleepProviderDyn>,
    storage: Arc<dyn StorageProviderDyn>,
    storage_events: Arc<dyn StorageEventsProviderDyn>,
    document: Arc<dyn DocumentProviderDyn>,
}

// =============================================================================
// Dynamic trait versions for Arc storage (need Send + Sync for Dioxus context)
// =============================================================================

trait SleepProviderDyn: Send + Sync {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

trait StorageProviderDyn: Send + Sync {
    fn save(&self, key: &str, value: &str);
    fn load(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

trait StorageEventsProviderDyn: Send + Sync {
    fn subscribe(&self) -> UnboundedReceiver<String>;
}

trait DocumentProviderDyn: Send + Sync {
    fn set_page_title(&self, title: &str);
    fn scroll_to_top(&self);
}

// =============================================================================
// Blanket implementations - convert port traits to dyn-safe wrappers
// =============================================================================

impl<T: SleepProvider + Send + Sync> SleepProviderDyn for T {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        SleepProvider::sleep_ms(self, ms)
    }
}

impl<T: StorageProvider + Send + Sync> StorageProviderDyn for T {
    fn save(&self, key: &str, value: &str) {
        StorageProvider::save(self, key, value)
    }
    fn load(&self, key: &str) -> Option<String> {
        StorageProvider::load(self, key)
    }
    fn remove(&self, key: &str) {
        StorageProvider::remove(self, key)
    }
}

impl<T: StorageEventsProvider + Send + Sync> StorageEventsProviderDyn for T {
    fn subscribe(&self) -> UnboundedReceiver<String> {
        StorageEventsProvider::subscribe(self)
    }
}

impl<T: DocumentProvider + Send + Sync> DocumentProviderDyn for T {
    fn set_page_title(&self, title: &str) {
        DocumentProvider::set_page_title(self, title)
    }
    fn scroll_to_top(&self) {
        DocumentProvider::scroll_to_top(self)
    }
}

// =============================================================================
// Platform implementation
// =============================================================================

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<Sl, S, E, D>(sleep: Sl, storage: S, storage_events: E, document: D) -> Self
    where
        Sl: SleepProvider + Send + Sync,
        S: StorageProvider + Send + Sync,
        E: StorageEventsProvider + Send + Sync,
        D: DocumentProvider + Send + Sync,
    {
        Self {
            sleep: Arc::new(sleep),
            storage: Arc::new(storage),
            storage_events: Arc::new(storage_events),
            document: Arc::new(document),
        }
    }
}

// =============================================================================
// PlatformPort implementation - lets the UI use the trait abstraction
// =============================================================================

impl PlatformPort for Platform {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        self.sleep.sleep_ms(ms)
    }

    fn storage_save(&self, key: &str, value: &str) {
        self.storage.save(key, value)
    }

    fn storage_load(&self, key: &str) -> Option<String> {
        self.storage.load(key)
    }

    fn storage_remove(&self, key: &str) {
        self.storage.remove(key)
    }

    fn storage_changes(&self) -> UnboundedReceiver<String> {
        self.storage_events.subscribe()
    }

    fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title)
    }

    fn scroll_to_top(&self) {
        self.document.scroll_to_top()
    }
}

// =============================================================================
// Storage adapter for application services
// =============================================================================

/// Adapter that allows application services to use the platform's storage
///
/// This implements the StorageProvider port trait, delegating to the
/// injected `PlatformPort`. Application services like `AuthService` stay
/// generic over `StorageProvider` and never see the container.
#[derive(Clone)]
pub struct PlatformStorageAdapter {
    platform: Arc<dyn PlatformPort>,
}

impl PlatformStorageAdapter {
    pub fn new(platform: Arc<dyn PlatformPort>) -> Self {
        Self { platform }
    }
}

impl StorageProvider for PlatformStorageAdapter {
    fn save(&self, key: &str, value: &str) {
        self.platform.storage_save(key, value)
    }

    fn load(&self, key: &str) -> Option<String> {
        self.platform.storage_load(key)
    }

    fn remove(&self, key: &str) {
        self.platform.storage_remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::AuthService;
    use crate::infrastructure::platform::mock::MockPlatform;
    use crate::ports::outbound::storage_keys;
    use adgorithm_domain::{Role, Session};

    fn adapter(mock: &MockPlatform) -> PlatformStorageAdapter {
        let port: Arc<dyn PlatformPort> = Arc::new(mock.platform());
        PlatformStorageAdapter::new(port)
    }

    #[test]
    fn test_auth_markers_go_through_platform_storage() {
        let mock = MockPlatform::new();
        let auth = AuthService::new(adapter(&mock));

        auth.login_as("influencer@example.com", "password123", Role::Influencer)
            .expect("well-formed credentials");

        assert_eq!(
            StorageProvider::load(&mock.storage, storage_keys::ROLE).as_deref(),
            Some("influencer")
        );
        assert!(StorageProvider::load(&mock.storage, storage_keys::AUTH_TOKEN).is_some());

        // A second service over the same storage sees the persisted session
        let restored = AuthService::new(adapter(&mock)).restore();
        assert_eq!(restored.role(), Some(Role::Influencer));

        auth.logout();
        assert!(mock.storage.is_empty());
        assert_eq!(AuthService::new(adapter(&mock)).restore(), Session::LoggedOut);
    }

    #[test]
    fn test_platform_forwards_document_calls() {
        let mock = MockPlatform::new();
        let platform = mock.platform();

        platform.set_page_title("Dashboard | adgorithm");
        platform.scroll_to_top();

        assert_eq!(mock.document.titles(), vec!["Dashboard | adgorithm"]);
        assert_eq!(mock.document.scroll_count(), 1);
    }
}
