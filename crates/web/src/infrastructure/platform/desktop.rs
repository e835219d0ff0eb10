//! Desktop platform implementations
//!
//! Provides platform-specific implementations for desktop using
//! standard library and native crates.

use crate::ports::outbound::platform::{
    DocumentProvider, SleepProvider, StorageEventsProvider, StorageProvider, PAGE_SCROLL_ID,
};
use crate::state::Platform;
use directories::ProjectDirs;
use futures_channel::mpsc::{self, UnboundedReceiver};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;
use std::{future::Future, pin::Pin, sync::Arc};

/// Desktop storage provider with file-based persistence
///
/// Stores key-value pairs in a JSON file at:
/// - Linux: ~/.config/web/storage.json
/// - macOS: ~/Library/Application Support/com.adgorithm.web/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\adgorithm\web\config\storage.json
///
/// Only the session markers from `storage_keys` are ever written.
#[derive(Clone)]
pub struct DesktopStorageProvider {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory cache of stored values
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for DesktopStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopStorageProvider {
    /// Create a new desktop storage provider
    ///
    /// Loads existing data from the storage file if it exists.
    pub fn new() -> Self {
        let storage_path = match ProjectDirs::from("com", "adgorithm", "web") {
            Some(dirs) => dirs.config_dir().join("storage.json"),
            // No home directory (sandboxed CI, for example)
            None => PathBuf::from("adgorithm_storage.json"),
        };
        Self::at(storage_path)
    }

    /// Open a storage file at an explicit path
    pub fn at(storage_path: PathBuf) -> Self {
        // Load existing data from file
        let cache = if storage_path.exists() {
            match fs::read_to_string(&storage_path) {
                Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                    Ok(map) => map,
                    Err(e) => {
                        tracing::warn!("Failed to parse storage file: {}", e);
                        HashMap::new()
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read storage file: {}", e);
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        tracing::debug!("Desktop storage initialized at: {:?}", storage_path);

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Persist the cache to disk
    fn persist(&self) {
        // Ensure parent directory exists
        if let Some(parent) = self.storage_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::error!("Failed to create storage directory: {}", e);
                return;
            }
        }

        // Write cache to file
        let cache = match self.cache.read() {
            Ok(guard) => guard,
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                return;
            }
        };

        match serde_json::to_string_pretty(&*cache) {
            Ok(data) => {
                if let Err(e) = fs::write(&self.storage_path, data) {
                    tracing::error!("Failed to write storage file: {}", e);
                }
            }
            Err(e) => {
                tracing::error!("Failed to serialize storage data: {}", e);
            }
        }
    }
}

impl StorageProvider for DesktopStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
                drop(guard); // Release lock before I/O
                self.persist();
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.cache.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.remove(key);
                drop(guard); // Release lock before I/O
                self.persist();
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
            }
        }
    }
}

/// Desktop document provider
///
/// The window title is fixed by the desktop config, so only scrolling is
/// forwarded to the webview.
#[derive(Clone, Default)]
pub struct DesktopDocumentProvider;

impl DocumentProvider for DesktopDocumentProvider {
    fn set_page_title(&self, _title: &str) {}

    fn scroll_to_top(&self) {
        let script = format!(
            "document.getElementById('{PAGE_SCROLL_ID}')?.scrollTo(0, 0); window.scrollTo(0, 0);"
        );
        let _ = dioxus::document::eval(&script);
    }
}

/// Desktop sleep provider using tokio timer
#[derive(Clone, Default)]
pub struct DesktopSleepProvider;

impl SleepProvider for DesktopSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async move {
            tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
        })
    }
}

/// Desktop storage events
///
/// A single process owns the storage file, so nothing else can change it
/// while the app runs. The receiver is closed from the start.
#[derive(Clone, Default)]
pub struct DesktopStorageEvents;

impl StorageEventsProvider for DesktopStorageEvents {
    fn subscribe(&self) -> UnboundedReceiver<String> {
        let (_tx, rx) = mpsc::unbounded();
        rx
    }
}

/// Create platform services for desktop
pub fn create_platform() -> Platform {
    Platform::new(
        DesktopSleepProvider,
        DesktopStorageProvider::new(),
        DesktopStorageEvents,
        DesktopDocumentProvider,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_storage(name: &str) -> (DesktopStorageProvider, PathBuf) {
        let path = std::env::temp_dir()
            .join(format!("adgorithm-{name}-{}", std::process::id()))
            .join("storage.json");
        let _ = fs::remove_file(&path);
        (DesktopStorageProvider::at(path.clone()), path)
    }

    #[test]
    fn saved_values_survive_reopening() {
        let (storage, path) = temp_storage("reopen");
        storage.save("adgorithm_role", "influencer");

        let reopened = DesktopStorageProvider::at(path.clone());
        assert_eq!(reopened.load("adgorithm_role").as_deref(), Some("influencer"));

        reopened.remove("adgorithm_role");
        assert_eq!(DesktopStorageProvider::at(path).load("adgorithm_role"), None);
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let (_, path) = temp_storage("corrupt");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "not json").unwrap();

        let storage = DesktopStorageProvider::at(path);
        assert_eq!(storage.load("adgorithm_auth_token"), None);
    }

    #[test]
    fn storage_events_are_closed() {
        let mut rx = DesktopStorageEvents.subscribe();
        assert_eq!(rx.try_next().ok(), Some(None));
    }
}
