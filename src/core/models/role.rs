//! Reviewer roles
//!
//! Each article is screened independently by two reviewers. The role tells the
//! remote store which decision column a reviewer writes to.

use serde::{Deserialize, Serialize};

/// Screening pass a reviewer is working on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// First independent reviewer
    #[serde(rename = "C1")]
    First,
    /// Second independent reviewer
    #[serde(rename = "C2")]
    Second,
}

impl Role {
    /// Wire code sent to the remote store (`C1` / `C2`)
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::First => "C1",
            Self::Second => "C2",
        }
    }

    /// Human label shown next to the reviewer name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::First => "First Reviewer",
            Self::Second => "Second Reviewer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c1" | "first" | "1" => Ok(Self::First),
            "c2" | "second" | "2" => Ok(Self::Second),
            _ => Err(format!("Invalid role: {s}. Use: C1 (first), C2 (second)")),
        }
    }
}

/// A logged-in reviewer: name plus screening role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reviewer {
    /// Reviewer identifier as listed by the remote store
    pub name: String,
    /// Screening pass
    pub role: Role,
}

impl Reviewer {
    /// Create a reviewer
    #[must_use]
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }

    /// Display label, e.g. `Alice (First Reviewer)`
    #[must_use]
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.role.label())
    }
}
