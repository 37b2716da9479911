use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{
    BlockHistory, BlockRequest, BlockedUsersPage, BlockedUsersQuery, UnblockRequest, UserSummary,
    UserType,
};

impl ApiClient {
    pub async fn blocked_users(&self, query: &BlockedUsersQuery) -> Result<BlockedUsersPage> {
        let request = self
            .get("/api/admin/blocks/users")
            .query(&query.to_params());
        self.send(request, "fetch blocked users").await
    }

    pub async fn block_user(&self, block: &BlockRequest) -> Result<()> {
        tracing::info!(
            "Blocking {} {} ({})",
            block.user_type,
            block.user_id,
            block.block_type
        );
        let request = self.post("/api/admin/blocks/block").json(block);
        self.send_ack(request, "block user").await
    }

    pub async fn unblock_user(&self, unblock: &UnblockRequest) -> Result<()> {
        tracing::info!("Unblocking {} {}", unblock.user_type, unblock.user_id);
        let request = self.post("/api/admin/blocks/unblock").json(unblock);
        self.send_ack(request, "unblock user").await
    }

    pub async fn block_history(&self, user_id: &str, user_type: &UserType) -> Result<BlockHistory> {
        let request = self
            .get(&format!("/api/admin/blocks/users/{user_id}/history"))
            .query(&[("userType", user_type.as_str())]);
        self.send(request, "fetch block history").await
    }

    /// Everyone the block form can pick from: helpers for `helper`,
    /// helpseekers otherwise.
    pub async fn block_candidates(&self, user_type: &UserType) -> Result<Vec<UserSummary>> {
        Ok(match user_type {
            UserType::Helper => self.helpers().await?.iter().map(UserSummary::from).collect(),
            _ => self
                .helpseekers()
                .await?
                .iter()
                .map(UserSummary::from)
                .collect(),
        })
    }
}
