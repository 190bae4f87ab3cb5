//! Response parsing for the spreadsheet API
//!
//! Every response is a JSON object. Failures carry an `error` field; successes
//! carry the payload under an operation-specific key.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::error::{DataError, GatewayError};
use crate::core::models::{Article, DecisionKind, ReviewedArticle, Summary, SummaryCounts};

/// Parse a body and surface a remote-reported error
pub fn parse_envelope(body: &str) -> Result<Value, GatewayError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| DataError::InvalidJson(e.to_string()))?;

    match value.get("error") {
        None | Some(Value::Null | Value::Bool(false)) => Ok(value),
        Some(Value::String(message)) => Err(GatewayError::Remote(message.clone())),
        Some(other) => Err(GatewayError::Remote(other.to_string())),
    }
}

fn field<T: DeserializeOwned>(value: &Value, name: &'static str) -> Result<T, DataError> {
    let raw = value.get(name).ok_or(DataError::MissingField(name))?;
    T::deserialize(raw).map_err(|e| DataError::InvalidField {
        field: name,
        message: e.to_string(),
    })
}

fn optional_list<T: DeserializeOwned>(value: &Value, name: &'static str) -> Result<Vec<T>, DataError> {
    match value.get(name) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(_) => field(value, name),
    }
}

/// `{"reviewers": ["..."]}`
pub fn reviewers(value: &Value) -> Result<Vec<String>, DataError> {
    field(value, "reviewers")
}

/// `{"articles": [{"rowIndex": .., ...}]}`
pub fn articles(value: &Value) -> Result<Vec<Article>, DataError> {
    let raw: Vec<Value> = field(value, "articles")?;
    raw.into_iter()
        .map(|entry| {
            if entry.get("rowIndex").is_none_or(Value::is_null) {
                return Err(DataError::MissingField("rowIndex"));
            }
            Article::deserialize(&entry).map_err(|e| DataError::InvalidField {
                field: "articles",
                message: e.to_string(),
            })
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct WireReviewed {
    #[serde(flatten)]
    article: Article,
    #[serde(default)]
    decision: Option<Value>,
    #[serde(default)]
    note: Option<String>,
}

impl From<WireReviewed> for ReviewedArticle {
    fn from(wire: WireReviewed) -> Self {
        let decision = wire
            .decision
            .and_then(|v| v.as_i64().or_else(|| v.as_str().and_then(|s| s.trim().parse().ok())))
            .and_then(DecisionKind::from_wire);
        Self {
            article: wire.article,
            decision,
            note: wire.note.filter(|n| !n.trim().is_empty()),
        }
    }
}

/// `{"summary": {...}, "reviewed": [...], "pending": [...]}`
pub fn summary(value: &Value) -> Result<Summary, DataError> {
    let counts: SummaryCounts = field(value, "summary")?;
    let reviewed: Vec<WireReviewed> = optional_list(value, "reviewed")?;
    let pending: Vec<Article> = optional_list(value, "pending")?;
    Ok(Summary {
        counts,
        reviewed: reviewed.into_iter().map(ReviewedArticle::from).collect(),
        pending,
    })
}
