//! Async key/value seam shared by every storage backend.
//!
//! Implementations swallow their own I/O errors: a read that fails is `None`
//! and a failed write is dropped. A broken store degrades to "signed out",
//! the backend stays the source of truth.

/// String keys to string values.
#[allow(async_fn_in_trait)]
pub trait KeyValueStore {
    async fn get(&self, key: &str) -> Option<String>;
    async fn set(&self, key: &str, value: &str);
    async fn remove(&self, key: &str);
}
