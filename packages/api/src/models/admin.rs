//! The signed-in administrator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient;

/// Admin profile as returned by the login endpoint and kept in storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    #[serde(deserialize_with = "lenient::id_string")]
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub profile_photo: Option<String>,
    pub created_at: DateTime<Utc>,
}

fn default_role() -> String {
    "admin".to_string()
}

impl Admin {
    /// Role as shown on the profile badge.
    pub fn role_badge(&self) -> String {
        self.role.to_uppercase()
    }

    pub fn phone_or_placeholder(&self) -> &str {
        self.phone
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or("Not provided")
    }
}

/// Body of `POST /api/auth/admin/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// A successful login: the bearer token plus the admin it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSession {
    pub token: String,
    pub admin: Admin,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_admin_roundtrips_through_storage_json() {
        let admin: Admin = serde_json::from_value(json!({
            "id": "a1",
            "fullName": "Asha Rao",
            "email": "asha@dolet.com",
            "role": "superadmin",
            "createdAt": "2024-03-01T10:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(admin.role_badge(), "SUPERADMIN");
        assert_eq!(admin.phone_or_placeholder(), "Not provided");

        let stored = serde_json::to_string(&admin).unwrap();
        let restored: Admin = serde_json::from_str(&stored).unwrap();
        assert_eq!(restored, admin);
    }
}
