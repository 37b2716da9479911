//! Endpoint tests against a mock backend.

use api::models::{
    BlockRequest, BlockStatusFilter, BlockType, BlockedUsersQuery, LoginRequest, ReplyRequest,
    ReportStatus, ReportsQuery, TicketsQuery, UnblockRequest, UserType, DEFAULT_UNBLOCK_REASON,
};
use api::{ApiClient, ApiError};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-token";

async fn backend() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(server.uri()).with_token(TOKEN);
    (server, client)
}

fn ok(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

fn helper(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "fullName": name,
        "phone": "9876543210",
        "email": format!("{}@example.com", name.to_lowercase()),
        "createdAt": "2025-01-01T00:00:00Z",
        "isApproved": true,
        "averageRating": "4.5",
        "totalEarnings": 1200
    })
}

#[tokio::test]
async fn test_login_returns_session_without_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/admin/login"))
        .and(body_json(json!({ "email": "admin@dolet.com", "password": "pw" })))
        .respond_with(ok(json!({
            "success": true,
            "message": "Login successful",
            "token": "jwt-abc",
            "admin": {
                "id": "a1",
                "fullName": "Asha Rao",
                "email": "admin@dolet.com",
                "role": "admin",
                "createdAt": "2024-01-01T00:00:00Z"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let session = client
        .login(&LoginRequest {
            email: "admin@dolet.com".into(),
            password: "pw".into(),
        })
        .await
        .unwrap();
    assert_eq!(session.token, "jwt-abc");
    assert_eq!(session.admin.full_name, "Asha Rao");

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_login_rejection_carries_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/admin/login"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "message": "Invalid credentials"
        })))
        .mount(&server)
        .await;

    let err = ApiClient::new(server.uri())
        .login(&LoginRequest {
            email: "x@y.z".into(),
            password: "bad".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.user_message("Invalid email or password"), "Invalid credentials");
}

#[tokio::test]
async fn test_pending_helpers_sends_bearer_token() {
    let (server, client) = backend().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/admin/helpers/pending"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ok(json!({
            "success": true,
            "helpers": [helper("h1", "Ravi"), helper("h2", "Meera")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let helpers = client.pending_helpers().await.unwrap();
    assert_eq!(helpers.len(), 2);
    assert_eq!(helpers[0].average_rating, 4.5);
    assert_eq!(helpers[1].total_earnings, 1200.0);
}

#[tokio::test]
async fn test_reject_helper_sends_reason() {
    let (server, client) = backend().await;
    Mock::given(method("PUT"))
        .and(path("/api/auth/admin/helpers/h1/reject"))
        .and(body_json(json!({ "reason": "Documents unreadable" })))
        .respond_with(ok(json!({ "success": true, "message": "Helper rejected" })))
        .expect(1)
        .mount(&server)
        .await;

    client
        .reject_helper("h1", "Documents unreadable")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_approve_helper_rejection_is_error() {
    let (server, client) = backend().await;
    Mock::given(method("PUT"))
        .and(path("/api/auth/admin/helpers/h1/approve"))
        .respond_with(ok(json!({ "success": false, "message": "Already approved" })))
        .mount(&server)
        .await;

    let err = client.approve_helper("h1").await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Rejected {
            message: Some("Already approved".into())
        }
    );
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let (server, client) = backend().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/admin/helpers"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "Token expired"
        })))
        .mount(&server)
        .await;

    let err = client.helpers().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.server_message(), Some("Token expired"));
}

#[tokio::test]
async fn test_login_unauthorized_keeps_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/admin/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "Account is deactivated"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let err = client
        .login(&LoginRequest {
            email: "admin@dolet.com".into(),
            password: "pw".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::Unauthorized {
            message: Some("Account is deactivated".into())
        }
    );
}

#[tokio::test]
async fn test_non_json_error_maps_to_status() {
    let (server, client) = backend().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/admin/helpseekers"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = client.helpseekers().await.unwrap_err();
    assert_eq!(err, ApiError::Status { status: 502 });
}

#[tokio::test]
async fn test_unexpected_shape_is_decode_error() {
    let (server, client) = backend().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/admin/helpers/h9"))
        .respond_with(ok(json!({ "success": true, "helper": { "id": "h9" } })))
        .mount(&server)
        .await;

    let err = client.helper("h9").await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let client = ApiClient::new("http://127.0.0.1:1").with_token(TOKEN);
    let err = client.helpers().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[tokio::test]
async fn test_helper_tasks() {
    let (server, client) = backend().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/helpers/h1/tasks"))
        .respond_with(ok(json!({
            "success": true,
            "tasks": [{
                "id": "t1",
                "title": "Move sofa",
                "status": "completed",
                "price": "450.00",
                "rating": 5,
                "createdAt": "2025-02-01T10:00:00Z",
                "helpseekerName": "Anu"
            }]
        })))
        .mount(&server)
        .await;

    let tasks = client.helper_tasks("h1").await.unwrap();
    assert_eq!(tasks[0].price, 450.0);
    assert_eq!(tasks[0].rating, Some(5.0));
    assert_eq!(tasks[0].helpseeker_name.as_deref(), Some("Anu"));
}

#[tokio::test]
async fn test_blocked_users_query_parameters() {
    let (server, client) = backend().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/blocks/users"))
        .and(query_param("status", "inactive"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "20"))
        .and(query_param("userType", "helper"))
        .respond_with(ok(json!({
            "success": true,
            "blockedUsers": [{
                "id": "b1",
                "userId": "h1",
                "userType": "helper",
                "blockType": "temporary",
                "reason": "No-shows",
                "isActive": false,
                "blockedAt": "2025-01-01T00:00:00Z",
                "unblockedAt": "2025-01-02T01:00:00Z"
            }],
            "pagination": { "page": 2, "limit": 20, "total": 21, "totalPages": 2 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client
        .blocked_users(&BlockedUsersQuery {
            status: BlockStatusFilter::Inactive,
            user_type: Some(UserType::Helper),
            page: 2,
            ..BlockedUsersQuery::default()
        })
        .await
        .unwrap();
    assert_eq!(page.pagination.total_pages, 2);
    assert_eq!(page.blocked_users[0].duration(), "1 day 1 hour");

    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap_or_default();
    assert!(!query.contains("blockType"));
}

#[tokio::test]
async fn test_block_and_unblock_bodies() {
    let (server, client) = backend().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/blocks/block"))
        .and(body_json(json!({
            "userId": "s1",
            "userType": "helpseeker",
            "blockType": "temporary",
            "reason": "Abuse",
            "durationHours": 48
        })))
        .respond_with(ok(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/admin/blocks/unblock"))
        .and(body_json(json!({
            "userId": "s1",
            "userType": "helpseeker",
            "unblockReason": "Unblocked by admin from panel"
        })))
        .respond_with(ok(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    client
        .block_user(&BlockRequest {
            user_id: "s1".into(),
            user_type: UserType::Helpseeker,
            block_type: BlockType::Temporary,
            reason: "Abuse".into(),
            duration_hours: Some(48),
        })
        .await
        .unwrap();
    client
        .unblock_user(&UnblockRequest {
            user_id: "s1".into(),
            user_type: UserType::Helpseeker,
            unblock_reason: DEFAULT_UNBLOCK_REASON.into(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_block_history() {
    let (server, client) = backend().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/blocks/users/h1/history"))
        .and(query_param("userType", "helper"))
        .respond_with(ok(json!({
            "success": true,
            "user": { "fullName": "Ravi" },
            "totalBlocks": 3,
            "activeBlocks": "1",
            "blockHistory": []
        })))
        .mount(&server)
        .await;

    let history = client.block_history("h1", &UserType::Helper).await.unwrap();
    assert_eq!(history.total_blocks, 3);
    assert_eq!(history.active_blocks, 1);
}

#[tokio::test]
async fn test_block_candidates_follow_user_type() {
    let (server, client) = backend().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/admin/helpseekers"))
        .respond_with(ok(json!({
            "success": true,
            "helpseekers": [{
                "id": "s1",
                "fullName": "Anu",
                "phone": "91234",
                "createdAt": "2025-01-01T00:00:00Z"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let candidates = client
        .block_candidates(&UserType::Helpseeker)
        .await
        .unwrap();
    assert_eq!(candidates[0].display_text(), "Anu (91234)");
}

#[tokio::test]
async fn test_reports_nested_payloads() {
    let (server, client) = backend().await;
    Mock::given(method("GET"))
        .and(path("/api/report/admin/all"))
        .and(query_param("status", "pending"))
        .respond_with(ok(json!({
            "success": true,
            "data": { "reports": [{
                "id": "r1",
                "reporterType": "helper",
                "reportedUserType": "helpseeker",
                "category": "spam",
                "status": "pending",
                "description": "Sends ads",
                "createdAt": "2025-01-01T00:00:00Z"
            }] }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/report/admin/stats"))
        .respond_with(ok(json!({
            "success": true,
            "data": { "statusBreakdown": {
                "pending": 4, "underReview": 2, "resolved": 9, "dismissed": 1
            } }
        })))
        .mount(&server)
        .await;

    let reports = client
        .reports(&ReportsQuery {
            status: Some(ReportStatus::Pending),
            ..ReportsQuery::default()
        })
        .await
        .unwrap();
    assert_eq!(reports.len(), 1);
    let stats = client.report_stats().await.unwrap();
    assert_eq!(stats.under_review, 2);
}

#[tokio::test]
async fn test_update_report_patch() {
    let (server, client) = backend().await;
    Mock::given(method("PATCH"))
        .and(path("/api/report/admin/r1"))
        .and(body_json(json!({
            "status": "resolved",
            "actionTaken": "warning_issued",
            "adminNotes": "Warned by phone"
        })))
        .respond_with(ok(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    client
        .update_report(
            "r1",
            &api::models::ReportUpdate {
                status: ReportStatus::Resolved,
                action_taken: api::models::ActionTaken::WarningIssued,
                admin_notes: "Warned by phone".into(),
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_tickets_page_and_reply() {
    let (server, client) = backend().await;
    Mock::given(method("GET"))
        .and(path("/api/support/admin/tickets"))
        .and(query_param("search", "refund"))
        .respond_with(ok(json!({
            "success": true,
            "data": {
                "tickets": [{
                    "ticketId": "TKT-1",
                    "title": "Refund",
                    "description": "Need a refund",
                    "subject": "payment_issue",
                    "status": "open",
                    "priority": "high",
                    "createdAt": "2025-01-01T00:00:00Z"
                }],
                "pagination": { "page": 1, "limit": 20, "totalPages": 1 },
                "stats": { "total": 10, "open": 3 }
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/support/ticket/TKT-1/reply"))
        .and(body_json(json!({ "message": "On it", "isInternal": false })))
        .respond_with(ok(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client
        .tickets(&TicketsQuery {
            search: "refund".into(),
            ..TicketsQuery::default()
        })
        .await
        .unwrap();
    assert_eq!(page.tickets[0].ticket_id, "TKT-1");
    assert_eq!(page.stats.map(|s| s.open), Some(3));

    client
        .reply_to_ticket(
            "TKT-1",
            &ReplyRequest {
                message: "On it".into(),
                is_internal: false,
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_dashboard_analytics_tolerates_failed_section() {
    let (server, client) = backend().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/helpers/analytics"))
        .respond_with(ok(json!({
            "success": true,
            "analytics": { "total": 10, "approved": 7, "pending": 3 }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/helpseekers/analytics"))
        .respond_with(ok(json!({
            "success": true,
            "analytics": { "total": 5, "active": 4, "inactive": 1 }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/blocks/analytics"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/report/admin/analytics"))
        .respond_with(ok(json!({ "success": true, "analytics": { "total": 0 } })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/support/admin/analytics"))
        .respond_with(ok(json!({ "success": false, "message": "disabled" })))
        .mount(&server)
        .await;

    let analytics = client.dashboard_analytics().await.unwrap();
    assert_eq!(analytics.helpers.map(|h| h.approved), Some(7));
    assert_eq!(analytics.helpseekers.map(|h| h.inactive), Some(1));
    assert!(analytics.blocks.is_none());
    assert_eq!(analytics.reports.map(|r| r.total), Some(0));
    assert!(analytics.support.is_none());
}

#[tokio::test]
async fn test_dashboard_analytics_unauthorized() {
    let (server, client) = backend().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client.dashboard_analytics().await.unwrap_err();
    assert_eq!(err, ApiError::Unauthorized { message: None });
}
