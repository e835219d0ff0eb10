//! In-memory platform for tests
//!
//! Every provider records what it was asked to do so tests can assert on it.
//! Sleeps complete immediately.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use std::{future::Future, pin::Pin};

use futures_channel::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::ports::outbound::platform::{
    DocumentProvider, SleepProvider, StorageEventsProvider, StorageProvider,
};
use crate::state::Platform;

/// Sleep that resolves at once and remembers the requested durations
#[derive(Clone, Default)]
pub struct MockSleepProvider {
    requested: Arc<Mutex<Vec<u64>>>,
}

impl MockSleepProvider {
    pub fn requested(&self) -> Vec<u64> {
        self.requested
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl SleepProvider for MockSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        if let Ok(mut guard) = self.requested.lock() {
            guard.push(ms);
        }
        Box::pin(std::future::ready(()))
    }
}

#[derive(Clone, Default)]
pub struct MockStorageProvider {
    data: Arc<RwLock<HashMap<String, String>>>,
}

impl MockStorageProvider {
    /// Write behind the app's back, as another tab would
    pub fn insert_external(&self, key: &str, value: &str) {
        if let Ok(mut guard) = self.data.write() {
            guard.insert(key.to_string(), value.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.data.read().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageProvider for MockStorageProvider {
    fn save(&self, key: &str, value: &str) {
        self.insert_external(key, value);
    }

    fn load(&self, key: &str) -> Option<String> {
        self.data.read().ok().and_then(|guard| guard.get(key).cloned())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut guard) = self.data.write() {
            guard.remove(key);
        }
    }
}

/// Storage events fed by the test through [`MockStorageEvents::emit`]
#[derive(Clone, Default)]
pub struct MockStorageEvents {
    subscribers: Arc<Mutex<Vec<UnboundedSender<String>>>>,
}

impl MockStorageEvents {
    pub fn emit(&self, key: &str) {
        if let Ok(mut guard) = self.subscribers.lock() {
            guard.retain(|tx| tx.unbounded_send(key.to_string()).is_ok());
        }
    }
}

impl StorageEventsProvider for MockStorageEvents {
    fn subscribe(&self) -> UnboundedReceiver<String> {
        let (tx, rx) = mpsc::unbounded();
        if let Ok(mut guard) = self.subscribers.lock() {
            guard.push(tx);
        }
        rx
    }
}

#[derive(Clone, Default)]
pub struct MockDocumentProvider {
    titles: Arc<Mutex<Vec<String>>>,
    scrolls: Arc<Mutex<u32>>,
}

impl MockDocumentProvider {
    pub fn titles(&self) -> Vec<String> {
        self.titles
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn scroll_count(&self) -> u32 {
        self.scrolls.lock().map(|guard| *guard).unwrap_or(0)
    }
}

impl DocumentProvider for MockDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Ok(mut guard) = self.titles.lock() {
            guard.push(title.to_string());
        }
    }

    fn scroll_to_top(&self) {
        if let Ok(mut guard) = self.scrolls.lock() {
            *guard += 1;
        }
    }
}

/// Handles to every mock provider plus a [`Platform`] built from them
#[derive(Clone, Default)]
pub struct MockPlatform {
    pub sleep: MockSleepProvider,
    pub storage: MockStorageProvider,
    pub storage_events: MockStorageEvents,
    pub document: MockDocumentProvider,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// A `Platform` sharing state with these handles
    pub fn platform(&self) -> Platform {
        Platform::new(
            self.sleep.clone(),
            self.storage.clone(),
            self.storage_events.clone(),
            self.document.clone(),
        )
    }
}
