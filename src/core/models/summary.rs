//! Screening summary for one reviewer and role

use serde::{Deserialize, Serialize};

use super::article::Article;
use super::decision::DecisionKind;

/// Aggregate counts reported by the remote store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryCounts {
    /// Articles assigned to the reviewer and role
    pub total: u64,
    /// Articles with a recorded decision
    pub reviewed: u64,
    /// Included articles
    pub included: u64,
    /// Excluded articles
    pub excluded: u64,
    /// Articles still awaiting a decision
    pub pending: u64,
}

/// An article that already has a decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewedArticle {
    /// Article metadata
    #[serde(flatten)]
    pub article: Article,
    /// Recorded outcome, if the store reported a recognisable value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<DecisionKind>,
    /// Recorded note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Summary of a reviewer's progress
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Aggregate counts
    pub counts: SummaryCounts,
    /// Articles already decided
    pub reviewed: Vec<ReviewedArticle>,
    /// Articles still pending
    pub pending: Vec<Article>,
}

impl Summary {
    /// Percentage of assigned articles that have been reviewed
    #[must_use]
    pub fn percent_complete(&self) -> f64 {
        let total = if self.counts.total > 0 {
            self.counts.total
        } else {
            self.counts.reviewed + self.counts.pending
        };
        if total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let pct = self.counts.reviewed as f64 / total as f64 * 100.0;
        pct
    }
}
