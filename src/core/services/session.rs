//! Session state
//!
//! The single owned value describing a screening session: who is logged in,
//! their queue, the cursor, navigation history and the current phase.
//! It only changes through [`super::transition::transition`].

use serde::Serialize;

use crate::core::models::{Article, Reviewer, Summary};

/// Where the session is in the review flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No reviewer logged in
    #[default]
    Unauthenticated,
    /// Waiting for the assigned articles
    QueueLoading,
    /// Showing the article at the cursor
    Reviewing,
    /// Cursor is past the last article
    QueueExhausted,
    /// Showing the progress summary
    SummaryView,
}

impl Phase {
    /// Short description used in error messages
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Unauthenticated => "not logged in",
            Self::QueueLoading => "loading articles",
            Self::Reviewing => "reviewing",
            Self::QueueExhausted => "all articles are reviewed",
            Self::SummaryView => "viewing the summary",
        }
    }
}

/// Remote call the session is waiting on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingCall {
    /// `getArticles` for a reviewer who is logging in
    Articles(Reviewer),
    /// `submitDecision` for the article at the cursor
    Decision,
    /// `getSummary`
    Summary,
}

/// Position within the queue
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
    /// 1-based position of the current article (capped at `total`)
    pub position: usize,
    /// Articles in the queue
    pub total: usize,
    /// Share of the queue behind the cursor
    pub percent: f64,
}

/// Screening session state
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub(super) reviewer: Option<Reviewer>,
    pub(super) queue: Vec<Article>,
    pub(super) cursor: usize,
    pub(super) history: Vec<usize>,
    pub(super) phase: Phase,
    pub(super) return_phase: Phase,
    pub(super) summary: Option<Summary>,
    pub(super) in_flight: Option<PendingCall>,
}

impl Session {
    /// Fresh, unauthenticated session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Logged-in reviewer
    #[must_use]
    pub const fn reviewer(&self) -> Option<&Reviewer> {
        self.reviewer.as_ref()
    }

    /// Assigned articles, in order
    #[must_use]
    pub fn queue(&self) -> &[Article] {
        &self.queue
    }

    /// Cursor into the queue; equal to its length when exhausted
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Previously visited cursor positions, most recent last
    #[must_use]
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Last loaded summary, while in the summary view
    #[must_use]
    pub const fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    /// Remote call in flight, if any
    #[must_use]
    pub const fn in_flight(&self) -> Option<&PendingCall> {
        self.in_flight.as_ref()
    }

    /// Whether a remote call is outstanding
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Article at the cursor
    #[must_use]
    pub fn current(&self) -> Option<&Article> {
        match self.phase {
            Phase::Reviewing => self.queue.get(self.cursor),
            _ => None,
        }
    }

    /// Whether "previous" would move
    #[must_use]
    pub const fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Progress through the queue
    #[must_use]
    pub fn progress(&self) -> Progress {
        let total = self.queue.len();
        #[allow(clippy::cast_precision_loss)]
        let percent = if total == 0 {
            0.0
        } else {
            self.cursor as f64 / total as f64 * 100.0
        };
        Progress {
            position: (self.cursor + 1).min(total),
            total,
            percent,
        }
    }

    /// Whether this is the initial empty shape
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reviewer.is_none()
            && self.queue.is_empty()
            && self.cursor == 0
            && self.history.is_empty()
            && self.phase == Phase::Unauthenticated
            && self.summary.is_none()
            && self.in_flight.is_none()
    }
}
