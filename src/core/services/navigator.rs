//! Queue navigator
//!
//! Drives a [`Session`] through the review flow. Each operation validates its
//! input, moves the session into its in-flight state, performs the remote call
//! and feeds the outcome back through [`transition`]. A failed operation
//! leaves the session where it started.

use log::{debug, info, warn};

use super::session::Session;
use super::transition::{Event, check, transition};
use crate::core::error::{NavigationError, ScreeningError, ValidationError};
use crate::core::models::{Decision, DecisionKind, Reviewer, Role, ScreeningPolicy};
use crate::core::ports::{DecisionSubmission, ReviewGateway, SavedLogin, SessionStore};

/// Review-flow driver over a gateway and a durable login store
pub struct Navigator<'a> {
    gateway: &'a dyn ReviewGateway,
    store: &'a dyn SessionStore,
    policy: ScreeningPolicy,
    session: Session,
}

impl std::fmt::Debug for Navigator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("policy", &self.policy)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl<'a> Navigator<'a> {
    /// Create a navigator with a fresh session
    #[must_use]
    pub fn new(
        gateway: &'a dyn ReviewGateway,
        store: &'a dyn SessionStore,
        policy: ScreeningPolicy,
    ) -> Self {
        Self {
            gateway,
            store,
            policy,
            session: Session::new(),
        }
    }

    /// Current session state
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Reason catalog and validation rules in force
    #[must_use]
    pub const fn policy(&self) -> &ScreeningPolicy {
        &self.policy
    }

    /// Login remembered from a previous session, for prefilling
    pub fn saved_login(&self) -> Result<Option<SavedLogin>, ScreeningError> {
        self.store
            .load()
            .map_err(|e| ScreeningError::Storage(format!("{e:#}")))
    }

    /// List reviewers known to the store
    pub fn reviewers(&self) -> Result<Vec<String>, ScreeningError> {
        Ok(self.gateway.get_reviewers()?)
    }

    /// Log in and fetch the reviewer's queue
    pub fn login(&mut self, name: &str, role: Role) -> Result<(), ScreeningError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingReviewer.into());
        }
        let reviewer = Reviewer::new(name, role);

        transition(
            &mut self.session,
            Event::LoginRequested {
                reviewer: reviewer.clone(),
            },
        )?;

        let articles = match self.gateway.get_articles(&reviewer) {
            Ok(articles) => articles,
            Err(e) => {
                warn!("Failed to load articles for {}: {e}", reviewer.display_label());
                transition(&mut self.session, Event::CallFailed)?;
                return Err(e.into());
            },
        };

        info!(
            "Logged in as {} with {} assigned article(s)",
            reviewer.display_label(),
            articles.len()
        );
        transition(&mut self.session, Event::ArticlesLoaded { articles })?;

        if let Err(e) = self.store.save(&SavedLogin::from_reviewer(&reviewer)) {
            warn!("Could not remember login: {e:#}");
        }
        Ok(())
    }

    /// Record a decision on the current article and advance.
    ///
    /// `reason` is either a catalog entry or its 1-based position. Input is
    /// validated before any remote call is made.
    pub fn decide(
        &mut self,
        kind: DecisionKind,
        reason: &str,
        notes: Option<&str>,
    ) -> Result<(), ScreeningError> {
        check(&self.session, &Event::DecisionRequested)?;
        let reviewer = self
            .session
            .reviewer()
            .cloned()
            .ok_or(NavigationError::NotLoggedIn)?;

        let reason = self.policy.resolve_reason(reviewer.role, kind, reason)?;
        let decision = Decision::new(kind, reason, notes.map(String::from));
        self.policy.validate(reviewer.role, &decision)?;

        let article = self
            .session
            .current()
            .cloned()
            .ok_or_else(|| NavigationError::NotAllowed {
                action: Event::DecisionRequested.action(),
                phase: self.session.phase().describe(),
            })?;
        let submission = DecisionSubmission::new(&article, &reviewer, &decision);

        transition(&mut self.session, Event::DecisionRequested)?;
        debug!("Submitting {} for row {}", decision.kind, article.row_index);

        if let Err(e) = self.gateway.submit_decision(&submission) {
            warn!("Failed to save decision for row {}: {e}", article.row_index);
            transition(&mut self.session, Event::CallFailed)?;
            return Err(e.into());
        }

        transition(&mut self.session, Event::DecisionRecorded)?;
        Ok(())
    }

    /// Move to the next article without deciding
    pub fn skip(&mut self) -> Result<(), ScreeningError> {
        transition(&mut self.session, Event::Skip)?;
        Ok(())
    }

    /// Return to the previously visited article.
    ///
    /// Returns `false` (and changes nothing) when there is no history.
    pub fn previous(&mut self) -> Result<bool, ScreeningError> {
        let moved = self.session.can_go_back();
        transition(&mut self.session, Event::Previous)?;
        Ok(moved)
    }

    /// Fetch the summary and switch to the summary view
    pub fn view_summary(&mut self) -> Result<(), ScreeningError> {
        transition(&mut self.session, Event::SummaryRequested)?;
        let Some(reviewer) = self.session.reviewer().cloned() else {
            transition(&mut self.session, Event::CallFailed)?;
            return Err(NavigationError::NotLoggedIn.into());
        };

        match self.gateway.get_summary(&reviewer) {
            Ok(summary) => {
                transition(&mut self.session, Event::SummaryLoaded { summary })?;
                Ok(())
            },
            Err(e) => {
                warn!("Failed to load summary: {e}");
                transition(&mut self.session, Event::CallFailed)?;
                Err(e.into())
            },
        }
    }

    /// Leave the summary view
    pub fn back(&mut self) -> Result<(), ScreeningError> {
        transition(&mut self.session, Event::Back)?;
        Ok(())
    }

    /// Reset the session and forget the saved login
    pub fn logout(&mut self) -> Result<(), ScreeningError> {
        if let Some(reviewer) = self.session.reviewer() {
            info!("Logging out {}", reviewer.display_label());
        }
        transition(&mut self.session, Event::Logout)?;
        self.store
            .clear()
            .map_err(|e| ScreeningError::Storage(format!("{e:#}")))
    }
}
