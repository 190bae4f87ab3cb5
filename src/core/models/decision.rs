//! Screening decisions
//!
//! A decision is an include/exclude outcome plus a reason drawn from the
//! reason catalog and optional free-text notes.

use serde::{Deserialize, Serialize};

use super::reason::REASON_OTHER;

/// Include or exclude outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionKind {
    /// Article is excluded from the review (wire value 0)
    Exclude,
    /// Article is included in the review (wire value 1)
    Include,
}

impl DecisionKind {
    /// Numeric value written to the spreadsheet
    #[must_use]
    pub const fn wire_value(self) -> u8 {
        match self {
            Self::Exclude => 0,
            Self::Include => 1,
        }
    }

    /// Decode the spreadsheet's numeric value
    #[must_use]
    pub const fn from_wire(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Exclude),
            1 => Some(Self::Include),
            _ => None,
        }
    }
}

impl std::fmt::Display for DecisionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exclude => write!(f, "exclude"),
            Self::Include => write!(f, "include"),
        }
    }
}

/// A reviewer's decision on one article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Include or exclude
    pub kind: DecisionKind,
    /// Reason from the catalog (may be empty for includes when policy allows)
    pub reason: String,
    /// Free-text notes, required when the reason is "other"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Decision {
    /// Create a decision; blank notes are dropped
    #[must_use]
    pub fn new(kind: DecisionKind, reason: impl Into<String>, notes: Option<String>) -> Self {
        Self {
            kind,
            reason: reason.into().trim().to_string(),
            notes: notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
        }
    }

    /// Whether the reason is the catch-all "other"
    #[must_use]
    pub fn is_other(&self) -> bool {
        self.reason.eq_ignore_ascii_case(REASON_OTHER)
    }

    /// Text written to the note column: the notes for "other", else the reason
    #[must_use]
    pub fn note(&self) -> String {
        if self.is_other() {
            self.notes.clone().unwrap_or_default()
        } else {
            self.reason.clone()
        }
    }

    /// Notes that accompany a catalog reason
    #[must_use]
    pub fn additional_comments(&self) -> Option<&str> {
        if self.is_other() {
            None
        } else {
            self.notes.as_deref()
        }
    }
}
