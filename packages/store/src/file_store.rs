//! # Filesystem-backed key/value store
//!
//! [`FileStore`] keeps one file per key under a base directory. The desktop
//! app uses it so the admin stays signed in across restarts.
//!
//! ## Platform data directories
//!
//! Callers pass [`dirs::data_dir()`]`/dolet-admin`:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/dolet-admin/` |
//! | Linux | `~/.local/share/dolet-admin/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\dolet-admin\` |

use std::path::PathBuf;

use crate::kv::KeyValueStore;

#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &std::path::Path {
        &self.base
    }

    /// Keys become file names; anything outside `[A-Za-z0-9_-]` is replaced
    /// so a key can never escape the base directory.
    fn key_path(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base.join(name)
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    async fn set(&self, key: &str, value: &str) {
        let _ = std::fs::create_dir_all(&self.base);
        let _ = std::fs::write(self.key_path(key), value);
    }

    async fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.key_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("dolet_admin_{name}_{}", std::process::id()))
    }

    #[tokio::test]
    async fn test_file_store_persists_across_instances() {
        let dir = temp_dir("persist");
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir.clone());
        store.set("token", "jwt-123").await;

        let reopened = FileStore::new(dir.clone());
        assert_eq!(reopened.get("token").await.as_deref(), Some("jwt-123"));

        reopened.remove("token").await;
        assert!(store.get("token").await.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_key_cannot_escape_base() {
        let dir = temp_dir("escape");
        let store = FileStore::new(dir.clone());
        assert_eq!(store.key_path("../etc/passwd"), dir.join("___etc_passwd"));
    }

    #[tokio::test]
    async fn test_missing_directory_reads_none() {
        let store = FileStore::new(temp_dir("missing").join("nope"));
        assert!(store.get("admin").await.is_none());
        store.remove("admin").await;
    }
}
