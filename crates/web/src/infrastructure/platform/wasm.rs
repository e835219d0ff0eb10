//! WASM platform implementations
//!
//! Browser-backed providers: `localStorage` with its `storage` event,
//! `gloo-timers` for sleeps, and `web-sys` for the document.

use std::{future::Future, pin::Pin};

use futures_channel::mpsc::{self, UnboundedReceiver};
use wasm_bindgen::{closure::Closure, JsCast};

use crate::ports::outbound::platform::{
    DocumentProvider, SleepProvider, StorageEventsProvider, StorageProvider, PAGE_SCROLL_ID,
};
use crate::state::Platform;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// WASM sleep provider using gloo-timers
#[derive(Clone, Default)]
pub struct WasmSleepProvider;

impl SleepProvider for WasmSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        Box::pin(gloo_timers::future::TimeoutFuture::new(ms))
    }
}

/// WASM storage provider backed by `window.localStorage`
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match local_storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    tracing::error!("Failed to write {} to localStorage", key);
                }
            }
            None => tracing::warn!("localStorage unavailable; {} not saved", key),
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            if storage.remove_item(key).is_err() {
                tracing::error!("Failed to remove {} from localStorage", key);
            }
        }
    }
}

/// Forwards the browser `storage` event, fired when another tab writes
/// `localStorage`
#[derive(Clone, Default)]
pub struct WasmStorageEvents;

impl StorageEventsProvider for WasmStorageEvents {
    fn subscribe(&self) -> UnboundedReceiver<String> {
        let (tx, rx) = mpsc::unbounded();
        let Some(window) = web_sys::window() else {
            return rx;
        };

        let callback = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(
            move |event: web_sys::StorageEvent| {
                // A null key means the whole storage was cleared
                let key = event.key().unwrap_or_default();
                let _ = tx.unbounded_send(key);
            },
        );

        if window
            .add_event_listener_with_callback("storage", callback.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!("Could not listen for storage events");
        }
        // The listener lives as long as the page
        callback.forget();
        rx
    }
}

/// WASM document provider
#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }

    fn scroll_to_top(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(element) = window
            .document()
            .and_then(|d| d.get_element_by_id(PAGE_SCROLL_ID))
        {
            element.set_scroll_top(0);
        }
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Create platform services for the browser
pub fn create_platform() -> Platform {
    Platform::new(
        WasmSleepProvider,
        WasmStorageProvider,
        WasmStorageEvents,
        WasmDocumentProvider,
    )
}
