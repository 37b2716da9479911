//! Abuse reports filed by one user against another.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{lenient, Tone, UserType};

wire_enum! {
    ReportStatus {
        Pending => "pending", "Pending";
        UnderReview => "under_review", "Under Review";
        Resolved => "resolved", "Resolved";
        Dismissed => "dismissed", "Dismissed";
    }
}

impl ReportStatus {
    pub fn tone(&self) -> Tone {
        match self {
            ReportStatus::Pending => Tone::Warning,
            ReportStatus::UnderReview => Tone::Info,
            ReportStatus::Resolved => Tone::Success,
            ReportStatus::Dismissed => Tone::Danger,
            ReportStatus::Unrecognized(_) => Tone::Secondary,
        }
    }
}

wire_enum! {
    ReportCategory {
        InappropriateBehavior => "inappropriate_behavior", "Inappropriate Behavior";
        Fraud => "fraud", "Fraud";
        Harassment => "harassment", "Harassment";
        ViolenceThreat => "violence_threat", "Violence/Threat";
        Spam => "spam", "Spam";
        FakeProfile => "fake_profile", "Fake Profile";
        PaymentIssue => "payment_issue", "Payment Issue";
        PoorService => "poor_service", "Poor Service";
        Other => "other", "Other";
    }
}

wire_enum! {
    ActionTaken {
        None => "none", "None";
        NoActionNeeded => "no_action_needed", "No Action Needed";
        WarningIssued => "warning_issued", "Warning Issued";
        AccountSuspended => "account_suspended", "Account Suspended";
        AccountBanned => "account_banned", "Account Banned";
    }
}

impl Default for ActionTaken {
    fn default() -> Self {
        ActionTaken::None
    }
}

/// Reporter or reported user as embedded in a report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportParty {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(deserialize_with = "lenient::id_string")]
    pub id: String,
    pub reporter_type: UserType,
    pub reported_user_type: UserType,
    pub category: ReportCategory,
    pub status: ReportStatus,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub admin_notes: Option<String>,
    #[serde(default)]
    pub action_taken: Option<ActionTaken>,
    #[serde(default)]
    pub task_id: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub reviewed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reporter_helper: Option<ReportParty>,
    #[serde(default)]
    pub reporter_helpseeker: Option<ReportParty>,
    #[serde(default)]
    pub reported_helper: Option<ReportParty>,
    #[serde(default)]
    pub reported_helpseeker: Option<ReportParty>,
}

impl Report {
    /// Whoever filed the report, from whichever side is populated.
    pub fn reporter(&self) -> Option<&ReportParty> {
        self.reporter_helper
            .as_ref()
            .or(self.reporter_helpseeker.as_ref())
    }

    pub fn reported(&self) -> Option<&ReportParty> {
        self.reported_helper
            .as_ref()
            .or(self.reported_helpseeker.as_ref())
    }

    /// Seed values for the action form.
    pub fn update_draft(&self) -> ReportUpdate {
        ReportUpdate {
            status: self.status.clone(),
            action_taken: self.action_taken.clone().unwrap_or_default(),
            admin_notes: self.admin_notes.clone().unwrap_or_default(),
        }
    }

    /// Status shown in the details modal: `UNDER REVIEW`.
    pub fn status_shout(&self) -> String {
        self.status.as_str().replace('_', " ").to_uppercase()
    }
}

/// `statusBreakdown` from `GET /api/report/admin/stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub pending: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub under_review: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub resolved: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub dismissed: u64,
}

/// Body of `PATCH /api/report/admin/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportUpdate {
    pub status: ReportStatus,
    pub action_taken: ActionTaken,
    pub admin_notes: String,
}

/// Server-side filters for the reports list; `None` means "all".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportsQuery {
    pub status: Option<ReportStatus>,
    pub category: Option<ReportCategory>,
    pub reported_user_type: Option<UserType>,
}

impl ReportsQuery {
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(ref status) = self.status {
            params.push(("status", status.to_string()));
        }
        if let Some(ref category) = self.category {
            params.push(("category", category.to_string()));
        }
        if let Some(ref user_type) = self.reported_user_type {
            params.push(("reportedUserType", user_type.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn report_json() -> serde_json::Value {
        json!({
            "id": "5f0c2a9e-1111-2222-3333-444455556666",
            "reporterType": "helpseeker",
            "reportedUserType": "helper",
            "category": "violence_threat",
            "status": "under_review",
            "description": "Threatened me after the task",
            "createdAt": "2025-03-10T12:00:00Z",
            "reporterHelpseeker": { "fullName": "Anu", "email": "anu@example.com" },
            "reportedHelper": { "fullName": "Vik", "phone": "90000" }
        })
    }

    #[test]
    fn test_report_parties_and_labels() {
        let report: Report = serde_json::from_value(report_json()).unwrap();
        assert_eq!(report.category.label(), "Violence/Threat");
        assert_eq!(report.status.tone(), Tone::Info);
        assert_eq!(report.status_shout(), "UNDER REVIEW");
        assert_eq!(
            report.reporter().and_then(|p| p.full_name.as_deref()),
            Some("Anu")
        );
        assert_eq!(
            report.reported().and_then(|p| p.phone.as_deref()),
            Some("90000")
        );
    }

    #[test]
    fn test_update_draft_defaults_action_to_none() {
        let report: Report = serde_json::from_value(report_json()).unwrap();
        let draft = report.update_draft();
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({
                "status": "under_review",
                "actionTaken": "none",
                "adminNotes": ""
            })
        );
    }

    #[test]
    fn test_unknown_category_kept_raw() {
        let mut raw = report_json();
        raw["category"] = json!("impersonation");
        let report: Report = serde_json::from_value(raw).unwrap();
        assert_eq!(report.category.label(), "impersonation");
    }

    #[test]
    fn test_query_skips_unset_filters() {
        let query = ReportsQuery {
            category: Some(ReportCategory::Spam),
            ..ReportsQuery::default()
        };
        assert_eq!(query.to_params(), vec![("category", "spam".to_string())]);
        assert!(ReportsQuery::default().to_params().is_empty());
    }
}
