//! # `localStorage` store: browser-side persistence
//!
//! [`WebStore`] is the [`KeyValueStore`] used on the web platform. Keys are
//! written to `window.localStorage` verbatim, so a session saved here is
//! visible to anything else served from the same origin.
//!
//! Storage can be unavailable (private browsing, disabled cookies); every
//! operation then behaves as if the key were absent.

use crate::kv::KeyValueStore;

#[derive(Clone, Debug, Default)]
pub struct WebStore;

impl WebStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for WebStore {
    async fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    async fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    async fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
