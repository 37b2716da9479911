use serde::Deserialize;

use super::helpers::TasksPayload;
use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{Helpseeker, TaskSummary};

#[derive(Deserialize)]
struct HelpseekersPayload {
    #[serde(default)]
    helpseekers: Vec<Helpseeker>,
}

#[derive(Deserialize)]
struct HelpseekerPayload {
    helpseeker: Helpseeker,
}

impl ApiClient {
    pub async fn helpseekers(&self) -> Result<Vec<Helpseeker>> {
        let request = self.get("/api/auth/admin/helpseekers");
        let payload: HelpseekersPayload = self.send(request, "fetch helpseekers").await?;
        Ok(payload.helpseekers)
    }

    pub async fn helpseeker(&self, helpseeker_id: &str) -> Result<Helpseeker> {
        let request = self.get(&format!("/api/auth/admin/helpseekers/{helpseeker_id}"));
        let payload: HelpseekerPayload = self.send(request, "fetch helpseeker").await?;
        Ok(payload.helpseeker)
    }

    pub async fn helpseeker_tasks(&self, helpseeker_id: &str) -> Result<Vec<TaskSummary>> {
        let request = self.get(&format!("/api/admin/helpseekers/{helpseeker_id}/tasks"));
        let payload: TasksPayload = self.send(request, "fetch helpseeker tasks").await?;
        Ok(payload.tasks)
    }
}
