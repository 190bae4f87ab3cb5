//! Tests for the HTTP gateway against a local fake of the web app

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use screener::adapters::{HttpGateway, RetryPolicy};
use screener::core::error::{DataError, GatewayError};
use screener::core::models::{Article, Decision, DecisionKind, Reviewer, Role};
use screener::core::ports::{DecisionSubmission, ReviewGateway};

use crate::common::fake_server::FakeServer;
use crate::common::fixtures::{articles_body, summary_body};

fn gateway(server: &FakeServer) -> HttpGateway {
    HttpGateway::new(server.url(), Duration::from_secs(5)).unwrap()
}

fn reviewer() -> Reviewer {
    Reviewer::new("Ana María", Role::Second)
}

// =============================================================================
// READ OPERATIONS
// =============================================================================

#[test]
fn test_get_reviewers() {
    let server = FakeServer::with_routes(vec![(
        "getReviewers",
        r#"{"reviewers":["Ada","Bo","Cy"]}"#.to_string(),
    )]);

    let reviewers = gateway(&server).get_reviewers().unwrap();

    assert_eq!(reviewers, vec!["Ada", "Bo", "Cy"]);
    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
}

#[test]
fn test_get_articles_sends_reviewer_and_role() {
    let server = FakeServer::with_routes(vec![("getArticles", articles_body(2))]);

    let articles = gateway(&server).get_articles(&reviewer()).unwrap();

    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].row_index, 2);
    assert_eq!(articles[0].title, "Article 1");
    assert_eq!(articles[0].year.as_deref(), Some("2020"));
    assert_eq!(articles[0].publication_type.as_deref(), Some("Journal Article"));
    assert_eq!(articles[0].abstract_text.as_deref(), Some("An abstract."));
    assert!(articles[0].url.is_none());

    let request = &server.requests_for("getArticles")[0];
    assert_eq!(request.query("reviewer").as_deref(), Some("Ana María"));
    assert_eq!(request.query("role").as_deref(), Some("C2"));
}

#[test]
fn test_get_summary() {
    let server = FakeServer::with_routes(vec![("getSummary", summary_body())]);

    let summary = gateway(&server).get_summary(&reviewer()).unwrap();

    assert_eq!(summary.counts.total, 3);
    assert_eq!(summary.counts.included, 1);
    assert_eq!(summary.reviewed.len(), 2);
    assert_eq!(summary.reviewed[0].decision, Some(DecisionKind::Include));
    assert_eq!(summary.reviewed[1].decision, Some(DecisionKind::Exclude));
    assert_eq!(summary.pending[0].title, "Article 3");
}

// =============================================================================
// FAILURES
// =============================================================================

#[test]
fn test_remote_error_field_is_surfaced() {
    let server = FakeServer::with_routes(vec![(
        "getArticles",
        r#"{"error":"Reviewer not found"}"#.to_string(),
    )]);

    let err = gateway(&server).get_articles(&reviewer()).unwrap_err();

    assert_eq!(err, GatewayError::Remote("Reviewer not found".to_string()));
}

#[test]
fn test_malformed_body_is_data_error() {
    let server = FakeServer::start(|_| (200, "<html>Sign in</html>".to_string()));

    let err = gateway(&server).get_reviewers().unwrap_err();

    assert!(matches!(err, GatewayError::Data(DataError::InvalidJson(_))));
}

#[test]
fn test_article_without_row_index_is_rejected() {
    let server = FakeServer::with_routes(vec![(
        "getArticles",
        r#"{"articles":[{"title":"No row"}]}"#.to_string(),
    )]);

    let err = gateway(&server).get_articles(&reviewer()).unwrap_err();

    assert_eq!(err, GatewayError::Data(DataError::MissingField("rowIndex")));
}

#[test]
fn test_http_error_status() {
    let server = FakeServer::start(|_| (500, "Internal error".to_string()));

    let err = gateway(&server).get_reviewers().unwrap_err();

    assert_eq!(err, GatewayError::Status(500));
}

#[test]
fn test_slow_response_times_out() {
    let server = FakeServer::start_with_delay(Duration::from_secs(1), |_| {
        (200, r#"{"reviewers":[]}"#.to_string())
    });
    let gateway = HttpGateway::new(server.url(), Duration::from_millis(200)).unwrap();

    let err = gateway.get_reviewers().unwrap_err();

    assert_eq!(err, GatewayError::Timeout(Duration::from_millis(200)));
}

#[test]
fn test_connection_refused_is_transport_error() {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let gateway =
        HttpGateway::new(&format!("http://127.0.0.1:{port}/exec"), Duration::from_secs(2)).unwrap();

    let err = gateway.get_reviewers().unwrap_err();

    assert!(matches!(err, GatewayError::Transport(_)));
}

// =============================================================================
// RETRIES
// =============================================================================

#[test]
fn test_reads_retry_transient_failures() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let server = FakeServer::start(move |_| {
        if counter.fetch_add(1, Ordering::SeqCst) < 2 {
            (503, "busy".to_string())
        } else {
            (200, r#"{"reviewers":["Ada"]}"#.to_string())
        }
    });
    let gateway = gateway(&server).with_retry(RetryPolicy {
        max_retries: 2,
        backoff: Duration::from_millis(10),
    });

    assert_eq!(gateway.get_reviewers().unwrap(), vec!["Ada"]);
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[test]
fn test_client_error_status_is_not_retried() {
    let server = FakeServer::start(|_| (404, "Not Found".to_string()));
    let gateway = gateway(&server).with_retry(RetryPolicy {
        max_retries: 3,
        backoff: Duration::from_millis(10),
    });

    let err = gateway.get_articles(&reviewer()).unwrap_err();

    assert_eq!(err, GatewayError::Status(404));
    assert_eq!(server.requests().len(), 1);
}

#[test]
fn test_remote_errors_are_not_retried() {
    let server = FakeServer::start(|_| (200, r#"{"error":"Bad role"}"#.to_string()));
    let gateway = gateway(&server).with_retry(RetryPolicy {
        max_retries: 3,
        backoff: Duration::from_millis(10),
    });

    assert!(gateway.get_reviewers().is_err());
    assert_eq!(server.requests().len(), 1);
}

// =============================================================================
// SUBMIT
// =============================================================================

#[test]
fn test_submit_decision_posts_params_and_body() {
    let server = FakeServer::with_routes(vec![("submitDecision", r#"{"success":true}"#.to_string())]);
    let article = Article::new(7, "Trust in AI");
    let decision = Decision::new(
        DecisionKind::Include,
        "Good Article",
        Some("strong method".to_string()),
    );
    let submission = DecisionSubmission::new(&article, &reviewer(), &decision);

    gateway(&server).submit_decision(&submission).unwrap();

    let request = &server.requests_for("submitDecision")[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.query("rowIndex").as_deref(), Some("7"));
    assert_eq!(request.query("reviewer").as_deref(), Some("Ana María"));
    assert_eq!(request.query("role").as_deref(), Some("C2"));
    assert_eq!(request.query("decision").as_deref(), Some("1"));
    assert_eq!(request.query("note").as_deref(), Some("Good Article"));
    assert_eq!(
        request.query("additionalComments").as_deref(),
        Some("strong method")
    );

    let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(body["rowIndex"], 7);
    assert_eq!(body["decision"], 1);
}

#[test]
fn test_submit_decision_is_never_retried() {
    let server = FakeServer::start(|_| (503, "busy".to_string()));
    let gateway = gateway(&server).with_retry(RetryPolicy {
        max_retries: 3,
        backoff: Duration::from_millis(10),
    });
    let decision = Decision::new(DecisionKind::Exclude, "duplicate", None);
    let submission =
        DecisionSubmission::new(&Article::new(3, "Dup"), &reviewer(), &decision);

    assert!(gateway.submit_decision(&submission).is_err());
    assert_eq!(server.requests().len(), 1);
}
