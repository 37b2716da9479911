//! Platform-specific persistence for the console.
//!
//! - **Web** (WASM + `web` feature): the session lives in `localStorage` via
//!   [`store::WebStore`]; preferences are compile-time defaults.
//! - **Desktop** (native): the session and `console.toml` live under
//!   `<data_dir>/dolet-admin/`.

use api::ApiConfig;
use store::{ConsoleConfig, KeyValueStore, SessionManager};

/// Directory name under the platform data dir.
#[cfg(not(target_arch = "wasm32"))]
const APP_DIR: &str = "dolet-admin";

/// Everything the console resolves once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct ConsoleSettings {
    pub api: ApiConfig,
    pub preferences: ConsoleConfig,
}

impl ConsoleSettings {
    /// `console.toml` wins over `ADMIN_API_BASE_URL`, which wins over the
    /// built-in default.
    pub fn resolve(preferences: ConsoleConfig) -> Self {
        let api = ApiConfig::from_env().with_override(preferences.api.base_url.as_deref());
        tracing::info!("Admin API at {}", api.base_url);
        Self { api, preferences }
    }

    pub fn load() -> Self {
        Self::resolve(load_preferences())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(APP_DIR)
}

/// Session storage for the current platform.
pub fn make_session_manager() -> SessionManager<impl KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionManager::new(store::WebStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        SessionManager::new(store::MemoryStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        SessionManager::new(store::FileStore::new(data_dir()))
    }
}

/// Read `console.toml`; a missing or malformed file yields the defaults.
pub fn load_preferences() -> ConsoleConfig {
    #[cfg(target_arch = "wasm32")]
    {
        ConsoleConfig::default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = data_dir().join(ConsoleConfig::filename());
        match std::fs::read_to_string(&path) {
            Ok(text) => ConsoleConfig::from_toml(&text).unwrap_or_else(|e| {
                tracing::warn!("Ignoring {}: {e}", path.display());
                ConsoleConfig::default()
            }),
            Err(_) => ConsoleConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_toml_base_url_wins() {
        let preferences = ConsoleConfig::default()
            .with_base_url("http://10.0.0.2:3000/")
            .with_refresh_secs(30);
        let settings = ConsoleSettings::resolve(preferences);
        assert_eq!(settings.api.base_url, "http://10.0.0.2:3000");
        assert_eq!(settings.preferences.dashboard.analytics_refresh_secs, 30);
    }
}
