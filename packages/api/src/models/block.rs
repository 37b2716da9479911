//! Administrative blocks (account suspensions).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient;
use crate::format;

/// Reason sent when an admin lifts a block from the blocked-users page.
pub const DEFAULT_UNBLOCK_REASON: &str = "Unblocked by admin from panel";

wire_enum! {
    /// Which kind of account a record refers to.
    UserType {
        Helper => "helper", "Helper";
        Helpseeker => "helpseeker", "Helpseeker";
        Admin => "admin", "Admin";
    }
}

impl UserType {
    /// Label used in "All User Types" filter dropdowns.
    pub fn plural_label(&self) -> &str {
        match self {
            UserType::Helper => "Helpers",
            UserType::Helpseeker => "Helpseekers",
            UserType::Admin => "Admins",
            UserType::Unrecognized(raw) => raw,
        }
    }
}

wire_enum! {
    BlockType {
        Temporary => "temporary", "Temporary";
        Permanent => "permanent", "Permanent";
    }
}

/// Server-side status filter on the blocked-users list. Always sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockStatusFilter {
    #[default]
    Active,
    Inactive,
    All,
}

impl BlockStatusFilter {
    pub fn all() -> [Self; 3] {
        [Self::Active, Self::Inactive, Self::All]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::All => "all",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active Blocks",
            Self::Inactive => "Inactive Blocks",
            Self::All => "All Blocks",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw {
            "inactive" => Self::Inactive,
            "all" => Self::All,
            _ => Self::Active,
        }
    }
}

/// Contact details embedded in block records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedUser {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub profile_photo: Option<String>,
}

impl BlockedUser {
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or("Unknown User")
    }

    /// Avatar fallback: first character of the name, or `?`.
    pub fn avatar_letter(&self) -> String {
        self.full_name
            .as_deref()
            .and_then(|n| n.trim().chars().next())
            .map(|c| c.to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}

/// One block record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(deserialize_with = "lenient::id_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::id_string")]
    pub user_id: String,
    pub user_type: UserType,
    pub block_type: BlockType,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub is_active: bool,
    pub blocked_at: DateTime<Utc>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub unblocked_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub unblock_reason: Option<String>,
    #[serde(default)]
    pub user: Option<BlockedUser>,
}

impl Block {
    pub fn time_remaining(&self, now: DateTime<Utc>) -> String {
        format::time_remaining(self.expires_at, now)
    }

    pub fn duration(&self) -> String {
        format::block_duration(self.blocked_at, self.unblocked_at)
    }

    pub fn user_or_default(&self) -> BlockedUser {
        self.user.clone().unwrap_or_default()
    }
}

/// Pagination block returned by paged list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default = "first_page", deserialize_with = "lenient::u64_or_zero")]
    pub page: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub limit: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub total: u64,
    #[serde(default = "first_page", deserialize_with = "lenient::u64_or_zero")]
    pub total_pages: u64,
}

fn first_page() -> u64 {
    1
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            total: 0,
            total_pages: 1,
        }
    }
}

impl Pagination {
    pub fn has_previous(&self, page: u64) -> bool {
        page > 1
    }

    pub fn has_next(&self, page: u64) -> bool {
        page < self.total_pages
    }
}

/// Query for `GET /api/admin/blocks/users`.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockedUsersQuery {
    pub status: BlockStatusFilter,
    /// `None` means all user types.
    pub user_type: Option<UserType>,
    /// `None` means all block types.
    pub block_type: Option<BlockType>,
    pub page: u64,
    pub limit: u64,
}

impl Default for BlockedUsersQuery {
    fn default() -> Self {
        Self {
            status: BlockStatusFilter::Active,
            user_type: None,
            block_type: None,
            page: 1,
            limit: 20,
        }
    }
}

impl BlockedUsersQuery {
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("status", self.status.as_str().to_string()),
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(ref user_type) = self.user_type {
            params.push(("userType", user_type.to_string()));
        }
        if let Some(ref block_type) = self.block_type {
            params.push(("blockType", block_type.to_string()));
        }
        params
    }
}

/// One page of the blocked-users list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedUsersPage {
    #[serde(default)]
    pub blocked_users: Vec<Block>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Body of `POST /api/admin/blocks/block`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockRequest {
    pub user_id: String,
    pub user_type: UserType,
    pub block_type: BlockType,
    pub reason: String,
    /// Only sent for temporary blocks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_hours: Option<u32>,
}

/// Body of `POST /api/admin/blocks/unblock`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnblockRequest {
    pub user_id: String,
    pub user_type: UserType,
    pub unblock_reason: String,
}

/// Response of `GET /api/admin/blocks/users/{id}/history`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockHistory {
    #[serde(default)]
    pub user: Option<BlockedUser>,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub total_blocks: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub active_blocks: u64,
    #[serde(default)]
    pub block_history: Vec<Block>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_omits_all_filters() {
        let params = BlockedUsersQuery::default().to_params();
        assert_eq!(
            params,
            vec![
                ("status", "active".to_string()),
                ("page", "1".to_string()),
                ("limit", "20".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_with_filters() {
        let query = BlockedUsersQuery {
            status: BlockStatusFilter::All,
            user_type: Some(UserType::Helpseeker),
            block_type: Some(BlockType::Permanent),
            page: 3,
            limit: 20,
        };
        let params = query.to_params();
        assert!(params.contains(&("status", "all".to_string())));
        assert!(params.contains(&("userType", "helpseeker".to_string())));
        assert!(params.contains(&("blockType", "permanent".to_string())));
        assert!(params.contains(&("page", "3".to_string())));
    }

    #[test]
    fn test_block_request_skips_duration_for_permanent() {
        let request = BlockRequest {
            user_id: "u1".into(),
            user_type: UserType::Helper,
            block_type: BlockType::Permanent,
            reason: "fraud".into(),
            duration_hours: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "userId": "u1",
                "userType": "helper",
                "blockType": "permanent",
                "reason": "fraud"
            })
        );
    }

    #[test]
    fn test_unknown_user_type_survives() {
        let block: Block = serde_json::from_value(json!({
            "id": "b1",
            "userId": "u1",
            "userType": "partner",
            "blockType": "temporary",
            "reason": "spam",
            "isActive": true,
            "blockedAt": "2025-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(block.user_type, UserType::Unrecognized("partner".into()));
        assert_eq!(block.user_type.label(), "partner");
        assert_eq!(block.user_or_default().display_name(), "Unknown User");
        assert_eq!(block.user_or_default().avatar_letter(), "?");
    }

    #[test]
    fn test_pagination_bounds() {
        let pagination = Pagination {
            total_pages: 3,
            ..Pagination::default()
        };
        assert!(!pagination.has_previous(1));
        assert!(pagination.has_next(2));
        assert!(!pagination.has_next(3));
    }
}
