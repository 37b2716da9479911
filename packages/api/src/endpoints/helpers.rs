use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{Helper, TaskSummary};

#[derive(Deserialize)]
struct HelpersPayload {
    #[serde(default)]
    helpers: Vec<Helper>,
}

#[derive(Deserialize)]
struct HelperPayload {
    helper: Helper,
}

#[derive(Deserialize)]
pub(super) struct TasksPayload {
    #[serde(default)]
    pub(super) tasks: Vec<TaskSummary>,
}

#[derive(Serialize)]
struct RejectBody<'a> {
    reason: &'a str,
}

impl ApiClient {
    /// Helpers waiting for approval.
    pub async fn pending_helpers(&self) -> Result<Vec<Helper>> {
        let request = self.get("/api/auth/admin/helpers/pending");
        let payload: HelpersPayload = self.send(request, "fetch pending helpers").await?;
        Ok(payload.helpers)
    }

    pub async fn approve_helper(&self, helper_id: &str) -> Result<()> {
        tracing::info!("Approving helper {helper_id}");
        let request = self.put(&format!("/api/auth/admin/helpers/{helper_id}/approve"));
        self.send_ack(request, "approve helper").await
    }

    pub async fn reject_helper(&self, helper_id: &str, reason: &str) -> Result<()> {
        tracing::info!("Rejecting helper {helper_id}");
        let request = self
            .put(&format!("/api/auth/admin/helpers/{helper_id}/reject"))
            .json(&RejectBody { reason });
        self.send_ack(request, "reject helper").await
    }

    pub async fn helpers(&self) -> Result<Vec<Helper>> {
        let request = self.get("/api/auth/admin/helpers");
        let payload: HelpersPayload = self.send(request, "fetch helpers").await?;
        Ok(payload.helpers)
    }

    pub async fn helper(&self, helper_id: &str) -> Result<Helper> {
        let request = self.get(&format!("/api/auth/admin/helpers/{helper_id}"));
        let payload: HelperPayload = self.send(request, "fetch helper").await?;
        Ok(payload.helper)
    }

    pub async fn helper_tasks(&self, helper_id: &str) -> Result<Vec<TaskSummary>> {
        let request = self.get(&format!("/api/admin/helpers/{helper_id}/tasks"));
        let payload: TasksPayload = self.send(request, "fetch helper tasks").await?;
        Ok(payload.tasks)
    }
}
