//! # Console preferences: `console.toml`
//!
//! Optional file read by the desktop app from its data directory. Every
//! section and key may be omitted; a missing or empty file is the default
//! configuration.
//!
//! ```toml
//! [api]
//! base_url = "https://api.dolet.example"   # overrides ADMIN_API_BASE_URL
//!
//! [dashboard]
//! analytics_refresh_secs = 5   # 0 disables auto-refresh
//!
//! [lists]
//! page_size = 20
//! search_debounce_ms = 500
//! ```

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub dashboard: DashboardSection,
    #[serde(default)]
    pub lists: ListsSection,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiSection {
    /// Backend base URL. Unset means "use the environment".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardSection {
    /// Analytics auto-refresh period. 0 disables auto-refresh.
    #[serde(default = "default_refresh_secs")]
    pub analytics_refresh_secs: u32,
}

fn default_refresh_secs() -> u32 {
    5
}

impl Default for DashboardSection {
    fn default() -> Self {
        Self {
            analytics_refresh_secs: default_refresh_secs(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListsSection {
    /// Rows per page on paginated lists (blocked users, tickets).
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Delay before the block-user search fires.
    #[serde(default = "default_debounce_ms")]
    pub search_debounce_ms: u32,
}

fn default_page_size() -> u32 {
    20
}

fn default_debounce_ms() -> u32 {
    500
}

impl Default for ListsSection {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            search_debounce_ms: default_debounce_ms(),
        }
    }
}

impl ConsoleConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "console.toml"
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = Some(base_url.into());
        self
    }

    pub fn with_refresh_secs(mut self, secs: u32) -> Self {
        self.dashboard.analytics_refresh_secs = secs;
        self
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ConsoleConfig::from_toml("").unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.dashboard.analytics_refresh_secs, 5);
        assert_eq!(config.lists.page_size, 20);
        assert_eq!(config.lists.search_debounce_ms, 500);
        assert!(config.api.base_url.is_none());
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = ConsoleConfig::from_toml(
            r#"
            [api]
            base_url = "https://api.example.com"

            [lists]
            page_size = 50
            "#,
        )
        .unwrap();
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("https://api.example.com")
        );
        assert_eq!(config.lists.page_size, 50);
        assert_eq!(config.lists.search_debounce_ms, 500);
        assert_eq!(config.dashboard.analytics_refresh_secs, 5);
    }

    #[test]
    fn test_roundtrip() {
        let config = ConsoleConfig::default()
            .with_base_url("http://10.0.0.2:3000")
            .with_refresh_secs(0);
        let text = config.to_toml().unwrap();
        assert_eq!(ConsoleConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(ConsoleConfig::from_toml("[dashboard]\nanalytics_refresh_secs = \"soon\"").is_err());
    }
}
