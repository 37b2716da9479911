use serde::Deserialize;

use super::Data;
use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{Report, ReportStats, ReportUpdate, ReportsQuery};

#[derive(Deserialize)]
struct ReportList {
    #[serde(default)]
    reports: Vec<Report>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatsBody {
    #[serde(default)]
    status_breakdown: ReportStats,
}

impl ApiClient {
    pub async fn reports(&self, query: &ReportsQuery) -> Result<Vec<Report>> {
        let request = self.get("/api/report/admin/all").query(&query.to_params());
        let payload: Data<ReportList> = self.send(request, "fetch reports").await?;
        Ok(payload.data.reports)
    }

    pub async fn report_stats(&self) -> Result<ReportStats> {
        let request = self.get("/api/report/admin/stats");
        let payload: Data<StatsBody> = self.send(request, "fetch report stats").await?;
        Ok(payload.data.status_breakdown)
    }

    pub async fn report(&self, report_id: &str) -> Result<Report> {
        let request = self.get(&format!("/api/report/admin/{report_id}"));
        let payload: Data<Report> = self.send(request, "fetch report").await?;
        Ok(payload.data)
    }

    pub async fn update_report(&self, report_id: &str, update: &ReportUpdate) -> Result<()> {
        tracing::info!(
            "Updating report {report_id}: status={} action={}",
            update.status,
            update.action_taken
        );
        let request = self
            .patch(&format!("/api/report/admin/{report_id}"))
            .json(update);
        self.send_ack(request, "update report").await
    }
}
