//! # Store crate: what the console keeps between launches
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`kv`] | [`KeyValueStore`] trait, the seam every backend implements |
//! | [`session`] | [`SessionManager`]: the signed-in admin's token and profile |
//! | [`config`] | [`ConsoleConfig`]: `console.toml` preferences |
//!
//! Backends: [`MemoryStore`] (tests), [`FileStore`] (desktop) and, with the
//! `web` feature on wasm32, [`WebStore`] over `localStorage`.

pub mod config;
pub mod kv;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web_store;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web_store::WebStore;

pub use config::ConsoleConfig;
pub use kv::KeyValueStore;
pub use session::{SessionManager, StoredSession};
