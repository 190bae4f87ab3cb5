//! Tests for output structures

use screener::core::models::{Article, Role};
use screener::output::{OperationResult, ReasonListResult, StatusResult, SummaryResult, meta_line};

use crate::common::fixtures::sample_summary;

#[test]
fn test_meta_line() {
    let mut article = Article::new(5, "Trust");
    assert_eq!(meta_line(&article), "Unknown · N/A");

    article.author = Some("Doe, J.".to_string());
    article.year = Some("2021".to_string());
    article.row_number = Some(5);
    assert_eq!(meta_line(&article), "Doe, J. · 2021 · Row 5");
}

#[test]
fn test_summary_result_json_is_flat() {
    let result = SummaryResult {
        reviewer: "Ada".to_string(),
        role: Role::First,
        summary: sample_summary(),
    };

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["reviewer"], "Ada");
    assert_eq!(json["role"], "C1");
    assert_eq!(json["counts"]["included"], 1);
    assert!(json["reviewed"].as_array().unwrap().is_empty());
}

#[test]
fn test_status_result_json() {
    let result = StatusResult {
        reviewer: None,
        role: None,
        saved_at: None,
        api_url: Some("https://script.example/exec".to_string()),
        config_path: "/tmp/config.toml".to_string(),
    };

    let json = serde_json::to_value(&result).unwrap();
    assert!(json["reviewer"].is_null());
    assert_eq!(json["api_url"], "https://script.example/exec");
}

#[test]
fn test_reason_list_json() {
    let result = ReasonListResult {
        role: Role::Second,
        require_include_reason: true,
        include: vec!["Good Article".to_string()],
        exclude: vec!["duplicate".to_string()],
    };

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["role"], "C2");
    assert_eq!(json["exclude"][0], "duplicate");
}

#[test]
fn test_operation_result_ok() {
    let result = OperationResult::ok("Logged out.");
    assert!(result.success);
    assert_eq!(result.message, "Logged out.");
}
