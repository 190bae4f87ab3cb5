//! Reason catalog and screening policy
//!
//! One authoritative list of include and exclude reasons, overridable per
//! role and per deployment through `config.toml`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::decision::{Decision, DecisionKind};
use super::role::Role;
use crate::core::error::ValidationError;

/// Catch-all reason that requires free-text notes
pub const REASON_OTHER: &str = "other";

fn default_include_reasons() -> Vec<String> {
    ["Good Article", "full text coded", REASON_OTHER]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_exclude_reasons() -> Vec<String> {
    [
        "not HAI",
        "not perceived transparency",
        "not relevant",
        "duplicate",
        REASON_OTHER,
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

const fn default_true() -> bool {
    true
}

/// Per-role overrides of the reason lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleReasons {
    /// Replaces the include reasons for this role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_reasons: Option<Vec<String>>,
    /// Replaces the exclude reasons for this role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_reasons: Option<Vec<String>>,
}

/// Rules a decision must satisfy before it is submitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningPolicy {
    /// Whether an include decision needs a reason
    #[serde(default = "default_true")]
    pub require_include_reason: bool,
    /// Reasons offered for inclusion
    #[serde(default = "default_include_reasons")]
    pub include_reasons: Vec<String>,
    /// Reasons offered for exclusion
    #[serde(default = "default_exclude_reasons")]
    pub exclude_reasons: Vec<String>,
    /// Role-specific overrides keyed by role code (`C1`, `C2`)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub roles: HashMap<String, RoleReasons>,
}

impl Default for ScreeningPolicy {
    fn default() -> Self {
        Self {
            require_include_reason: true,
            include_reasons: default_include_reasons(),
            exclude_reasons: default_exclude_reasons(),
            roles: HashMap::new(),
        }
    }
}

impl ScreeningPolicy {
    /// Reasons offered to `role` for an outcome
    #[must_use]
    pub fn reasons(&self, role: Role, kind: DecisionKind) -> &[String] {
        let overrides = self.roles.get(role.code());
        let list = match kind {
            DecisionKind::Include => overrides
                .and_then(|r| r.include_reasons.as_ref())
                .unwrap_or(&self.include_reasons),
            DecisionKind::Exclude => overrides
                .and_then(|r| r.exclude_reasons.as_ref())
                .unwrap_or(&self.exclude_reasons),
        };
        list.as_slice()
    }

    /// Resolve user input to a catalog reason.
    ///
    /// Accepts a 1-based position in the list or the reason text
    /// (case-insensitive). Blank input resolves to an empty reason so that
    /// [`Self::validate`] can apply the include policy.
    pub fn resolve_reason(
        &self,
        role: Role,
        kind: DecisionKind,
        input: &str,
    ) -> Result<String, ValidationError> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(String::new());
        }

        let reasons = self.reasons(role, kind);
        if let Ok(n) = input.parse::<usize>() {
            return n
                .checked_sub(1)
                .and_then(|i| reasons.get(i))
                .cloned()
                .ok_or_else(|| ValidationError::UnknownReason {
                    reason: input.to_string(),
                    kind,
                });
        }

        reasons
            .iter()
            .find(|r| r.eq_ignore_ascii_case(input))
            .cloned()
            .ok_or_else(|| ValidationError::UnknownReason {
                reason: input.to_string(),
                kind,
            })
    }

    /// Check a decision against the policy for `role`
    pub fn validate(&self, role: Role, decision: &Decision) -> Result<(), ValidationError> {
        if decision.reason.is_empty() {
            return match decision.kind {
                DecisionKind::Include if !self.require_include_reason => Ok(()),
                kind => Err(ValidationError::MissingReason { kind }),
            };
        }

        let known = self
            .reasons(role, decision.kind)
            .iter()
            .any(|r| r.eq_ignore_ascii_case(&decision.reason));
        if !known {
            return Err(ValidationError::UnknownReason {
                reason: decision.reason.clone(),
                kind: decision.kind,
            });
        }

        if decision.is_other() && decision.notes.is_none() {
            return Err(ValidationError::NotesRequired);
        }

        Ok(())
    }
}
