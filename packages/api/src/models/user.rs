//! Marketplace users: helpers (service providers) and helpseekers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient;

/// A helper account, as listed on the pending and all-helpers pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Helper {
    #[serde(deserialize_with = "lenient::id_string")]
    pub id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub profile_photo: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub verification_status: Option<String>,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub average_rating: f64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub completed_tasks: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub total_tasks: u64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub total_earnings: f64,
    #[serde(default)]
    pub account_holder_name: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub ifsc_code: Option<String>,
    #[serde(default)]
    pub aadhar_card_document: Option<String>,
    #[serde(default)]
    pub address_proof_document: Option<String>,
    #[serde(default)]
    pub driving_license_document: Option<String>,
}

/// One of the verification documents a helper uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelperDocument {
    AadharCard,
    AddressProof,
    DrivingLicense,
}

impl HelperDocument {
    pub fn label(self) -> &'static str {
        match self {
            HelperDocument::AadharCard => "Aadhar Card",
            HelperDocument::AddressProof => "Address Proof",
            HelperDocument::DrivingLicense => "Driving License",
        }
    }
}

impl Helper {
    pub fn display_name(&self) -> &str {
        non_blank(self.full_name.as_deref()).unwrap_or("Helper")
    }

    /// Uploaded documents with their URLs, in a fixed order. Missing or
    /// blank links are skipped.
    pub fn documents(&self) -> Vec<(HelperDocument, &str)> {
        [
            (HelperDocument::AadharCard, &self.aadhar_card_document),
            (HelperDocument::AddressProof, &self.address_proof_document),
            (HelperDocument::DrivingLicense, &self.driving_license_document),
        ]
        .into_iter()
        .filter_map(|(kind, url)| non_blank(url.as_deref()).map(|url| (kind, url)))
        .collect()
    }
}

/// A helpseeker account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Helpseeker {
    #[serde(deserialize_with = "lenient::id_string")]
    pub id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub profile_photo: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub total_tasks: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub completed_tasks: u64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub total_spent: f64,
}

impl Helpseeker {
    pub fn display_name(&self) -> &str {
        non_blank(self.full_name.as_deref()).unwrap_or("Helpseeker")
    }
}

/// A task in a user's history tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    #[serde(deserialize_with = "lenient::id_string")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub rating: Option<f64>,
    pub created_at: DateTime<Utc>,
    /// Set on a helper's tasks.
    #[serde(default)]
    pub helpseeker_name: Option<String>,
    /// Set on a helpseeker's tasks.
    #[serde(default)]
    pub helper_name: Option<String>,
}

/// The fields the block-user search needs, for either kind of user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub id: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl UserSummary {
    /// Text placed in the search box once a user is picked:
    /// `"Name (phone)"`, or `"Name (email)"` when there is no phone.
    pub fn display_text(&self) -> String {
        let name = self.full_name.as_deref().unwrap_or_default();
        match non_blank(self.phone.as_deref()) {
            Some(phone) => format!("{name} ({phone})"),
            None => format!("{name} ({})", self.email.as_deref().unwrap_or_default()),
        }
    }
}

impl From<&Helper> for UserSummary {
    fn from(helper: &Helper) -> Self {
        Self {
            id: helper.id.clone(),
            full_name: helper.full_name.clone(),
            email: helper.email.clone(),
            phone: Some(helper.phone.clone()),
        }
    }
}

impl From<&Helpseeker> for UserSummary {
    fn from(helpseeker: &Helpseeker) -> Self {
        Self {
            id: helpseeker.id.clone(),
            full_name: helpseeker.full_name.clone(),
            email: helpseeker.email.clone(),
            phone: Some(helpseeker.phone.clone()),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn helper_json() -> serde_json::Value {
        json!({
            "id": "h-1",
            "fullName": "Ravi Kumar",
            "phone": "9876543210",
            "createdAt": "2025-01-05T09:30:00Z",
            "verificationStatus": "pending",
            "isApproved": false,
            "averageRating": "4.25",
            "completedTasks": 12,
            "totalEarnings": "15400.00",
            "aadharCardDocument": "https://cdn/aadhar.pdf",
            "addressProofDocument": "",
            "drivingLicenseDocument": "https://cdn/dl.pdf"
        })
    }

    #[test]
    fn test_helper_decodes_mixed_numeric_types() {
        let helper: Helper = serde_json::from_value(helper_json()).unwrap();
        assert_eq!(helper.average_rating, 4.25);
        assert_eq!(helper.completed_tasks, 12);
        assert_eq!(helper.total_tasks, 0);
        assert_eq!(helper.total_earnings, 15400.0);
        assert_eq!(helper.display_name(), "Ravi Kumar");
    }

    #[test]
    fn test_helper_documents_skip_blank_links() {
        let helper: Helper = serde_json::from_value(helper_json()).unwrap();
        let docs: Vec<&str> = helper.documents().iter().map(|(d, _)| d.label()).collect();
        assert_eq!(docs, vec!["Aadhar Card", "Driving License"]);
    }

    #[test]
    fn test_display_text_prefers_phone() {
        let mut user = UserSummary {
            id: "u".into(),
            full_name: Some("Meera".into()),
            email: Some("meera@example.com".into()),
            phone: Some("99000".into()),
        };
        assert_eq!(user.display_text(), "Meera (99000)");
        user.phone = Some(String::new());
        assert_eq!(user.display_text(), "Meera (meera@example.com)");
    }

    #[test]
    fn test_unnamed_helpseeker() {
        let seeker: Helpseeker = serde_json::from_value(json!({
            "id": 7,
            "phone": "91234",
            "createdAt": "2025-02-01T00:00:00Z",
            "totalSpent": 99.5
        }))
        .unwrap();
        assert_eq!(seeker.id, "7");
        assert_eq!(seeker.display_name(), "Helpseeker");
        assert_eq!(seeker.total_spent, 99.5);
    }
}
