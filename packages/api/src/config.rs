//! Backend location.
//!
//! The web build reads `ADMIN_API_BASE_URL` at compile time (there is no
//! process environment inside the browser). Native builds load `.env` through
//! `dotenvy` and read the variable at startup.

pub const BASE_URL_ENV: &str = "ADMIN_API_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Where the admin backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    /// Build a config, dropping surrounding whitespace and trailing slashes
    /// so paths can be appended verbatim.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the base URL from the environment, falling back to
    /// [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        #[cfg(target_arch = "wasm32")]
        let configured = option_env!("ADMIN_API_BASE_URL").map(str::to_string);

        #[cfg(not(target_arch = "wasm32"))]
        let configured = {
            dotenvy::dotenv().ok();
            std::env::var(BASE_URL_ENV).ok()
        };

        match configured.filter(|url| !url.trim().is_empty()) {
            Some(url) => Self::new(url),
            None => {
                tracing::debug!("{BASE_URL_ENV} not set, using {DEFAULT_BASE_URL}");
                Self::default()
            }
        }
    }

    /// Prefer an explicit override (e.g. from `console.toml`) over this config.
    #[must_use]
    pub fn with_override(self, base_url: Option<&str>) -> Self {
        match base_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => Self::new(url),
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_trailing_slashes() {
        assert_eq!(
            ApiConfig::new(" https://api.dolet.in/// ").base_url,
            "https://api.dolet.in"
        );
    }

    #[test]
    fn test_override_ignores_blank() {
        let config = ApiConfig::new("http://a").with_override(Some("  "));
        assert_eq!(config.base_url, "http://a");
        let config = config.with_override(Some("http://b/"));
        assert_eq!(config.base_url, "http://b");
        assert_eq!(ApiConfig::default().base_url, DEFAULT_BASE_URL);
    }
}
