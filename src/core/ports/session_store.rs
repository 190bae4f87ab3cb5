//! Durable login store port
//!
//! Remembers the last reviewer and role so login can be prefilled.

use serde::{Deserialize, Serialize};

use super::super::models::{Reviewer, Role};

/// Last successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedLogin {
    /// Reviewer name
    pub reviewer: String,
    /// Role code
    pub role: Role,
    /// When the login was saved (RFC3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}

impl SavedLogin {
    /// Snapshot a reviewer, stamped with the current time
    #[must_use]
    pub fn from_reviewer(reviewer: &Reviewer) -> Self {
        Self {
            reviewer: reviewer.name.clone(),
            role: reviewer.role,
            saved_at: Some(chrono::Utc::now().to_rfc3339()),
        }
    }

    /// The reviewer this login describes
    #[must_use]
    pub fn to_reviewer(&self) -> Reviewer {
        Reviewer::new(self.reviewer.clone(), self.role)
    }
}

/// Storage for the saved login
pub trait SessionStore {
    /// Load the saved login, if any
    fn load(&self) -> anyhow::Result<Option<SavedLogin>>;

    /// Persist a login, replacing any previous one
    fn save(&self, login: &SavedLogin) -> anyhow::Result<()>;

    /// Forget the saved login
    fn clear(&self) -> anyhow::Result<()>;
}
