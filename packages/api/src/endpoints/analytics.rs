use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{
    BlockAnalytics, DashboardAnalytics, HelperAnalytics, HelpseekerAnalytics, ReportAnalytics,
    SupportAnalytics,
};

#[derive(Deserialize)]
struct Analytics<T> {
    analytics: T,
}

impl ApiClient {
    async fn analytics<T: DeserializeOwned>(&self, path: &str, action: &str) -> Result<T> {
        let payload: Analytics<T> = self.send(self.get(path), action).await?;
        Ok(payload.analytics)
    }

    pub async fn helper_analytics(&self) -> Result<HelperAnalytics> {
        self.analytics("/api/admin/helpers/analytics", "fetch helper analytics")
            .await
    }

    pub async fn helpseeker_analytics(&self) -> Result<HelpseekerAnalytics> {
        self.analytics("/api/admin/helpseekers/analytics", "fetch helpseeker analytics")
            .await
    }

    pub async fn block_analytics(&self) -> Result<BlockAnalytics> {
        self.analytics("/api/admin/blocks/analytics", "fetch block analytics")
            .await
    }

    pub async fn report_analytics(&self) -> Result<ReportAnalytics> {
        self.analytics("/api/report/admin/analytics", "fetch report analytics")
            .await
    }

    pub async fn support_analytics(&self) -> Result<SupportAnalytics> {
        self.analytics("/api/support/admin/analytics", "fetch support analytics")
            .await
    }

    /// Fetch all five sections concurrently. A failed section comes back as
    /// `None`; the others are unaffected.
    ///
    /// An expired token still fails the whole call, so the caller can sign out.
    pub async fn dashboard_analytics(&self) -> Result<DashboardAnalytics> {
        let (helpers, helpseekers, blocks, reports, support) = futures::join!(
            self.helper_analytics(),
            self.helpseeker_analytics(),
            self.block_analytics(),
            self.report_analytics(),
            self.support_analytics(),
        );

        let unauthorized = [
            helpers.as_ref().err(),
            helpseekers.as_ref().err(),
            blocks.as_ref().err(),
            reports.as_ref().err(),
            support.as_ref().err(),
        ]
        .into_iter()
        .flatten()
        .find(|e| e.is_unauthorized())
        .cloned();
        if let Some(err) = unauthorized {
            return Err(err);
        }

        Ok(DashboardAnalytics {
            helpers: helpers.ok(),
            helpseekers: helpseekers.ok(),
            blocks: blocks.ok(),
            reports: reports.ok(),
            support: support.ok(),
        })
    }
}
