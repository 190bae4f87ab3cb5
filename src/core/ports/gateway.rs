//! Remote gateway port
//!
//! Defines the named operations the screening session issues against the
//! spreadsheet-backed store.

use serde::Serialize;

use super::super::error::GatewayError;
use super::super::models::{Article, Decision, Reviewer, Summary};

/// One decision to be written back to the store, keyed by row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionSubmission {
    /// Row the decision belongs to
    pub row_index: u64,
    /// Reviewer name
    pub reviewer: String,
    /// Role code (`C1` / `C2`)
    pub role: String,
    /// 0 = exclude, 1 = include
    pub decision: u8,
    /// Note column value
    pub note: String,
    /// Extra notes alongside a catalog reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_comments: Option<String>,
}

impl DecisionSubmission {
    /// Build the submission for `decision` on `article`
    #[must_use]
    pub fn new(article: &Article, reviewer: &Reviewer, decision: &Decision) -> Self {
        Self {
            row_index: article.row_index,
            reviewer: reviewer.name.clone(),
            role: reviewer.role.code().to_string(),
            decision: decision.kind.wire_value(),
            note: decision.note(),
            additional_comments: decision.additional_comments().map(String::from),
        }
    }

    /// Query parameters in wire order
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("rowIndex", self.row_index.to_string()),
            ("reviewer", self.reviewer.clone()),
            ("role", self.role.clone()),
            ("decision", self.decision.to_string()),
            ("note", self.note.clone()),
        ];
        if let Some(comments) = &self.additional_comments {
            params.push(("additionalComments", comments.clone()));
        }
        params
    }
}

/// Remote store for reviewers, articles and decisions
///
/// Implementations own the transport, timeout and response parsing. Every
/// failure is reported as a [`GatewayError`]; there are no partial results.
pub trait ReviewGateway {
    /// List reviewer identifiers
    fn get_reviewers(&self) -> Result<Vec<String>, GatewayError>;

    /// Articles assigned to `reviewer` that still need a decision, in order
    fn get_articles(&self, reviewer: &Reviewer) -> Result<Vec<Article>, GatewayError>;

    /// Write one decision
    ///
    /// Must not be retried by implementations: the store has no idempotency key.
    fn submit_decision(&self, submission: &DecisionSubmission) -> Result<(), GatewayError>;

    /// Progress summary for `reviewer`
    fn get_summary(&self, reviewer: &Reviewer) -> Result<Summary, GatewayError>;
}
