//! Counters behind the analytics overview.

use serde::{Deserialize, Serialize};

use super::lenient;
use crate::format::bar_width;

/// One bar of a distribution chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionBar {
    pub label: &'static str,
    pub value: u64,
    /// CSS modifier for the bar fill.
    pub class: &'static str,
    /// Percentage of the section total, in `0.0..=100.0`.
    pub width: f64,
}

impl DistributionBar {
    fn new(label: &'static str, value: u64, class: &'static str, total: u64) -> Self {
        Self {
            label,
            value,
            class,
            width: bar_width(value, total),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HelperAnalytics {
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub total: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub approved: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub pending: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub rejected: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub suspended: u64,
}

impl HelperAnalytics {
    pub fn bars(&self) -> Vec<DistributionBar> {
        vec![
            DistributionBar::new("Pending", self.pending, "pending", self.total),
            DistributionBar::new("Approved", self.approved, "approved", self.total),
            DistributionBar::new("Rejected", self.rejected, "rejected", self.total),
            DistributionBar::new("Suspended", self.suspended, "suspended", self.total),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HelpseekerAnalytics {
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub total: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub active: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub inactive: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockAnalytics {
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportAnalytics {
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub total: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub pending: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub under_review: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub resolved: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub dismissed: u64,
}

impl ReportAnalytics {
    pub fn bars(&self) -> Vec<DistributionBar> {
        vec![
            DistributionBar::new("Pending", self.pending, "pending", self.total),
            DistributionBar::new("Under Review", self.under_review, "info", self.total),
            DistributionBar::new("Resolved", self.resolved, "approved", self.total),
            DistributionBar::new("Dismissed", self.dismissed, "secondary", self.total),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportAnalytics {
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub total: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub open: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub in_progress: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub waiting_for_response: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub resolved: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub closed: u64,
}

impl SupportAnalytics {
    pub fn bars(&self) -> Vec<DistributionBar> {
        vec![
            DistributionBar::new("Open", self.open, "danger", self.total),
            DistributionBar::new("In Progress", self.in_progress, "info", self.total),
            DistributionBar::new("Waiting", self.waiting_for_response, "purple", self.total),
            DistributionBar::new("Resolved", self.resolved, "approved", self.total),
            DistributionBar::new("Closed", self.closed, "secondary", self.total),
        ]
    }
}

/// All five sections; a section is `None` when its request failed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardAnalytics {
    pub helpers: Option<HelperAnalytics>,
    pub helpseekers: Option<HelpseekerAnalytics>,
    pub blocks: Option<BlockAnalytics>,
    pub reports: Option<ReportAnalytics>,
    pub support: Option<SupportAnalytics>,
}

impl DashboardAnalytics {
    pub fn is_empty(&self) -> bool {
        self.helpers.is_none()
            && self.helpseekers.is_none()
            && self.blocks.is_none()
            && self.reports.is_none()
            && self.support.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_helper_bars_are_percentages() {
        let helpers: HelperAnalytics = serde_json::from_value(json!({
            "total": "40",
            "approved": 30,
            "pending": 6,
            "rejected": 4
        }))
        .unwrap();
        let widths: Vec<f64> = helpers.bars().iter().map(|b| b.width).collect();
        assert_eq!(widths, vec![15.0, 75.0, 10.0, 0.0]);
    }

    #[test]
    fn test_zero_total_gives_empty_bars() {
        let support = SupportAnalytics {
            open: 3,
            ..SupportAnalytics::default()
        };
        assert!(support.bars().iter().all(|b| b.width == 0.0));
        assert_eq!(support.bars()[2].label, "Waiting");
    }

    #[test]
    fn test_dashboard_empty() {
        let mut analytics = DashboardAnalytics::default();
        assert!(analytics.is_empty());
        analytics.blocks = Some(BlockAnalytics { total: 2 });
        assert!(!analytics.is_empty());
    }
}
