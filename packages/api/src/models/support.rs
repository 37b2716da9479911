//! Help-desk tickets and their reply threads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{lenient, Pagination, Tone, UserType};

wire_enum! {
    TicketStatus {
        Open => "open", "Open";
        InProgress => "in_progress", "In Progress";
        WaitingForResponse => "waiting_for_response", "Waiting for Response";
        Resolved => "resolved", "Resolved";
        Closed => "closed", "Closed";
        Reopened => "reopened", "Reopened";
    }
}

impl TicketStatus {
    /// Shorter label used on list badges.
    pub fn badge_label(&self) -> &str {
        match self {
            TicketStatus::WaitingForResponse => "Waiting",
            other => other.label(),
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            TicketStatus::Open => Tone::Warning,
            TicketStatus::InProgress => Tone::Info,
            TicketStatus::WaitingForResponse => Tone::Purple,
            TicketStatus::Resolved => Tone::Success,
            TicketStatus::Closed | TicketStatus::Unrecognized(_) => Tone::Secondary,
            TicketStatus::Reopened => Tone::Danger,
        }
    }
}

wire_enum! {
    TicketPriority {
        Low => "low", "Low";
        Medium => "medium", "Medium";
        High => "high", "High";
        Urgent => "urgent", "Urgent";
    }
}

impl TicketPriority {
    /// Filter dropdown order, most pressing first.
    pub fn by_urgency() -> Vec<Self> {
        let mut all = Self::all();
        all.reverse();
        all
    }
}

wire_enum! {
    TicketSubject {
        TechnicalIssue => "technical_issue", "Technical Issue";
        PaymentIssue => "payment_issue", "Payment Issue";
        AccountIssue => "account_issue", "Account Issue";
        TaskIssue => "task_issue", "Task Issue";
        FeatureRequest => "feature_request", "Feature Request";
        BugReport => "bug_report", "Bug Report";
        GeneralInquiry => "general_inquiry", "General Inquiry";
        Other => "other", "Other";
    }
}

/// User attached to a ticket or a reply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketAuthor {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profile_photo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketReply {
    #[serde(deserialize_with = "lenient::id_string")]
    pub id: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub is_admin_reply: bool,
    #[serde(default)]
    pub is_internal: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub attachments: Vec<String>,
    #[serde(default)]
    pub user: Option<TicketAuthor>,
}

impl TicketReply {
    pub fn author_name(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.full_name.as_deref())
            .unwrap_or("Unknown")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    /// Human-facing ticket number (`TKT-...`); every ticket endpoint keys on it.
    pub ticket_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub subject: TicketSubject,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    #[serde(default)]
    pub user_type: Option<UserType>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub attachments: Vec<String>,
    #[serde(default)]
    pub user: Option<TicketAuthor>,
    #[serde(default)]
    pub replies: Vec<TicketReply>,
}

impl SupportTicket {
    /// `"1 Reply"`, `"3 Replies"`; `None` when nobody has replied.
    pub fn replies_label(&self) -> Option<String> {
        match self.replies.len() {
            0 => None,
            1 => Some("1 Reply".to_string()),
            n => Some(format!("{n} Replies")),
        }
    }

    /// Who opened the ticket, for the "Created by" line.
    pub fn creator_label(&self) -> &str {
        self.user_type.as_ref().map_or("User", |t| t.label())
    }

    pub fn update_draft(&self) -> TicketUpdate {
        TicketUpdate {
            status: self.status.clone(),
            priority: self.priority.clone(),
        }
    }
}

/// Counters from `/api/support/admin/statistics` (or embedded in a list page).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketStats {
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

/// `data` of `GET /api/support/admin/tickets`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TicketsPage {
    #[serde(default)]
    pub tickets: Vec<SupportTicket>,
    #[serde(default)]
    pub pagination: Pagination,
    #[serde(default)]
    pub stats: Option<TicketStats>,
}

/// Server-side filters and paging for the ticket list.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketsQuery {
    pub page: u64,
    pub limit: u64,
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
    pub subject: Option<TicketSubject>,
    /// Sent only when non-blank.
    pub search: String,
}

impl Default for TicketsQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            status: None,
            priority: None,
            subject: None,
            search: String::new(),
        }
    }
}

impl TicketsQuery {
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(ref status) = self.status {
            params.push(("status", status.to_string()));
        }
        if let Some(ref priority) = self.priority {
            params.push(("priority", priority.to_string()));
        }
        if let Some(ref subject) = self.subject {
            params.push(("subject", subject.to_string()));
        }
        let search = self.search.trim();
        if !search.is_empty() {
            params.push(("search", search.to_string()));
        }
        params
    }
}

/// Body of `PATCH /api/support/admin/ticket/{ticketId}/update`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketUpdate {
    pub status: TicketStatus,
    pub priority: TicketPriority,
}

/// Body of `POST /api/support/ticket/{ticketId}/reply`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyRequest {
    pub message: String,
    pub is_internal: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ticket_json() -> serde_json::Value {
        json!({
            "id": 12,
            "ticketId": "TKT-1001",
            "title": "Payment not received",
            "description": "I completed the task but was not paid",
            "subject": "payment_issue",
            "status": "waiting_for_response",
            "priority": "urgent",
            "userType": "helper",
            "createdAt": "2025-04-02T08:15:00Z",
            "replies": [
                {
                    "id": "r1",
                    "message": "Looking into it",
                    "isAdminReply": true,
                    "isInternal": false,
                    "createdAt": "2025-04-02T09:00:00Z"
                }
            ]
        })
    }

    #[test]
    fn test_ticket_labels() {
        let ticket: SupportTicket = serde_json::from_value(ticket_json()).unwrap();
        assert_eq!(ticket.status.badge_label(), "Waiting");
        assert_eq!(ticket.status.label(), "Waiting for Response");
        assert_eq!(ticket.status.tone(), Tone::Purple);
        assert_eq!(ticket.subject.label(), "Payment Issue");
        assert_eq!(ticket.creator_label(), "Helper");
        assert_eq!(ticket.replies_label().as_deref(), Some("1 Reply"));
        assert_eq!(ticket.replies[0].author_name(), "Unknown");
    }

    #[test]
    fn test_replies_label_plural_and_empty() {
        let mut ticket: SupportTicket = serde_json::from_value(ticket_json()).unwrap();
        let reply = ticket.replies[0].clone();
        ticket.replies.push(reply);
        assert_eq!(ticket.replies_label().as_deref(), Some("2 Replies"));
        ticket.replies.clear();
        assert_eq!(ticket.replies_label(), None);
    }

    #[test]
    fn test_query_params() {
        let query = TicketsQuery {
            page: 2,
            priority: Some(TicketPriority::High),
            search: "  TKT-10 ".into(),
            ..TicketsQuery::default()
        };
        assert_eq!(
            query.to_params(),
            vec![
                ("page", "2".to_string()),
                ("limit", "20".to_string()),
                ("priority", "high".to_string()),
                ("search", "TKT-10".to_string()),
            ]
        );
    }

    #[test]
    fn test_priority_urgency_order() {
        assert_eq!(
            TicketPriority::by_urgency(),
            vec![
                TicketPriority::Urgent,
                TicketPriority::High,
                TicketPriority::Medium,
                TicketPriority::Low
            ]
        );
    }

    #[test]
    fn test_reply_request_shape() {
        let body = ReplyRequest {
            message: "Refund issued".into(),
            is_internal: true,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "message": "Refund issued", "isInternal": true })
        );
    }
}
