//! # Admin session persistence
//!
//! A signed-in session is three keys, written together and cleared together:
//!
//! | Key | Value |
//! |-----|-------|
//! | `token` | Bearer token from the login endpoint |
//! | `admin` | Admin profile as JSON |
//! | `isAuthenticated` | The literal string `"true"` |
//!
//! [`SessionManager::load`] only returns a session when all three are present
//! and the profile parses; anything less is treated as signed out.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::kv::KeyValueStore;

pub const TOKEN_KEY: &str = "token";
pub const ADMIN_KEY: &str = "admin";
pub const AUTHENTICATED_KEY: &str = "isAuthenticated";

/// Token plus the admin profile it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredSession<A> {
    pub token: String,
    pub admin: A,
}

/// Reads and writes the session keys on any [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct SessionManager<S> {
    store: S,
}

impl<S: KeyValueStore> SessionManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn save<A: Serialize>(&self, token: &str, admin: &A) {
        let Ok(admin_json) = serde_json::to_string(admin) else {
            return;
        };
        self.store.set(TOKEN_KEY, token).await;
        self.store.set(ADMIN_KEY, &admin_json).await;
        self.store.set(AUTHENTICATED_KEY, "true").await;
    }

    pub async fn load<A: DeserializeOwned>(&self) -> Option<StoredSession<A>> {
        if self.store.get(AUTHENTICATED_KEY).await.as_deref() != Some("true") {
            return None;
        }
        let token = self.store.get(TOKEN_KEY).await.filter(|t| !t.is_empty())?;
        let admin_json = self.store.get(ADMIN_KEY).await?;
        let admin = serde_json::from_str(&admin_json).ok()?;
        Some(StoredSession { token, admin })
    }

    pub async fn clear(&self) {
        self.store.remove(TOKEN_KEY).await;
        self.store.remove(ADMIN_KEY).await;
        self.store.remove(AUTHENTICATED_KEY).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use serde::Deserialize;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Profile {
        email: String,
    }

    fn profile() -> Profile {
        Profile {
            email: "admin@dolet.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_load_clear() {
        let store = MemoryStore::new();
        let sessions = SessionManager::new(store.clone());
        assert!(sessions.load::<Profile>().await.is_none());

        sessions.save("jwt", &profile()).await;
        assert_eq!(store.get(AUTHENTICATED_KEY).await.as_deref(), Some("true"));

        let session = sessions.load::<Profile>().await.unwrap();
        assert_eq!(session.token, "jwt");
        assert_eq!(session.admin, profile());

        sessions.clear().await;
        assert!(sessions.load::<Profile>().await.is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_missing_flag_means_signed_out() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "jwt").await;
        store.set(ADMIN_KEY, r#"{"email":"a@b.c"}"#).await;
        let sessions = SessionManager::new(store.clone());
        assert!(sessions.load::<Profile>().await.is_none());

        store.set(AUTHENTICATED_KEY, "yes").await;
        assert!(sessions.load::<Profile>().await.is_none());
    }

    #[tokio::test]
    async fn test_corrupt_admin_json_means_signed_out() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "jwt").await;
        store.set(ADMIN_KEY, "{not json").await;
        store.set(AUTHENTICATED_KEY, "true").await;
        let sessions = SessionManager::new(store);
        assert!(sessions.load::<Profile>().await.is_none());
    }

    #[tokio::test]
    async fn test_empty_token_means_signed_out() {
        let sessions = SessionManager::new(MemoryStore::new());
        sessions.save("", &profile()).await;
        assert!(sessions.load::<Profile>().await.is_none());
    }
}
