//! Pure state transition function.
//!
//! Takes the session and an event and either applies the event or rejects it.
//! A rejected event leaves the session untouched. This function performs no
//! I/O; remote calls are made by the [`super::navigator::Navigator`], which
//! reports their outcome back as events.

use log::debug;

use super::session::{PendingCall, Phase, Session};
use crate::core::error::NavigationError;
use crate::core::models::{Article, Reviewer, Summary};

/// Everything that can change a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    // =========================================================================
    // Reviewer actions
    // =========================================================================
    /// Reviewer asked to log in; articles are about to be fetched
    LoginRequested {
        /// Reviewer logging in
        reviewer: Reviewer,
    },
    /// A valid decision is about to be submitted for the current article
    DecisionRequested,
    /// Move to the next article without deciding
    Skip,
    /// Return to the previously visited article
    Previous,
    /// Summary is about to be fetched
    SummaryRequested,
    /// Leave the summary view
    Back,
    /// Discard everything
    Logout,

    // =========================================================================
    // Remote call outcomes
    // =========================================================================
    /// `getArticles` succeeded
    ArticlesLoaded {
        /// Assigned articles, in order
        articles: Vec<Article>,
    },
    /// `submitDecision` succeeded
    DecisionRecorded,
    /// `getSummary` succeeded
    SummaryLoaded {
        /// Loaded summary
        summary: Summary,
    },
    /// The outstanding remote call failed
    CallFailed,
}

impl Event {
    /// Verb used in error messages
    #[must_use]
    pub const fn action(&self) -> &'static str {
        match self {
            Self::LoginRequested { .. } => "log in",
            Self::DecisionRequested | Self::DecisionRecorded => "record a decision",
            Self::Skip => "skip",
            Self::Previous => "go back",
            Self::SummaryRequested => "view the summary",
            Self::Back => "return to review",
            Self::Logout => "log out",
            Self::ArticlesLoaded { .. } => "load articles",
            Self::SummaryLoaded { .. } => "load the summary",
            Self::CallFailed => "finish a request",
        }
    }

    const fn is_completion(&self) -> bool {
        matches!(
            self,
            Self::ArticlesLoaded { .. }
                | Self::DecisionRecorded
                | Self::SummaryLoaded { .. }
                | Self::CallFailed
        )
    }
}

const fn not_allowed(session: &Session, event: &Event) -> NavigationError {
    NavigationError::NotAllowed {
        action: event.action(),
        phase: session.phase.describe(),
    }
}

/// Check whether `event` would be accepted, without applying it.
pub fn check(session: &Session, event: &Event) -> Result<(), NavigationError> {
    if matches!(event, Event::Logout) {
        return Ok(());
    }

    if event.is_completion() {
        let expected = matches!(
            (event, &session.in_flight),
            (Event::ArticlesLoaded { .. }, Some(PendingCall::Articles(_)))
                | (Event::DecisionRecorded, Some(PendingCall::Decision))
                | (Event::SummaryLoaded { .. }, Some(PendingCall::Summary))
                | (Event::CallFailed, Some(_))
        );
        return if expected {
            Ok(())
        } else {
            Err(not_allowed(session, event))
        };
    }

    if session.in_flight.is_some() {
        return Err(NavigationError::Busy);
    }

    match (session.phase, event) {
        (Phase::Unauthenticated, Event::LoginRequested { .. })
        | (Phase::Reviewing | Phase::QueueExhausted, Event::Previous)
        | (Phase::SummaryView, Event::Back)
        | (
            Phase::Reviewing | Phase::QueueExhausted | Phase::SummaryView,
            Event::SummaryRequested,
        ) => Ok(()),

        (Phase::Reviewing, Event::DecisionRequested) if session.cursor < session.queue.len() => {
            Ok(())
        },

        (Phase::Reviewing, Event::Skip) => {
            if session.cursor + 1 < session.queue.len() {
                Ok(())
            } else {
                Err(NavigationError::LastArticle)
            }
        },

        (
            Phase::Unauthenticated,
            Event::SummaryRequested | Event::DecisionRequested | Event::Skip | Event::Previous,
        ) => Err(NavigationError::NotLoggedIn),

        _ => Err(not_allowed(session, event)),
    }
}

/// Apply `event` to `session`.
///
/// On `Err` the session is exactly as it was before the call.
pub fn transition(session: &mut Session, event: Event) -> Result<(), NavigationError> {
    check(session, &event)?;
    debug!("transition: {:?} + {}", session.phase, event.action());

    match event {
        Event::LoginRequested { reviewer } => {
            session.phase = Phase::QueueLoading;
            session.in_flight = Some(PendingCall::Articles(reviewer));
        },

        Event::ArticlesLoaded { articles } => {
            if let Some(PendingCall::Articles(reviewer)) = session.in_flight.take() {
                session.phase = if articles.is_empty() {
                    Phase::QueueExhausted
                } else {
                    Phase::Reviewing
                };
                session.reviewer = Some(reviewer);
                session.queue = articles;
                session.cursor = 0;
                session.history.clear();
                session.summary = None;
            }
        },

        Event::DecisionRequested => {
            session.in_flight = Some(PendingCall::Decision);
        },

        // The decided article stays in the queue; the cursor moves past it.
        Event::DecisionRecorded => {
            session.in_flight = None;
            session.history.push(session.cursor);
            session.cursor += 1;
            if session.cursor >= session.queue.len() {
                session.cursor = session.queue.len();
                session.phase = Phase::QueueExhausted;
            }
        },

        Event::Skip => {
            session.history.push(session.cursor);
            session.cursor += 1;
        },

        Event::Previous => {
            // Empty history is a no-op
            if let Some(index) = session.history.pop() {
                session.cursor = index.min(session.queue.len().saturating_sub(1));
                session.phase = Phase::Reviewing;
            }
        },

        Event::SummaryRequested => {
            session.in_flight = Some(PendingCall::Summary);
        },

        Event::SummaryLoaded { summary } => {
            session.in_flight = None;
            if session.phase != Phase::SummaryView {
                session.return_phase = session.phase;
            }
            session.phase = Phase::SummaryView;
            session.summary = Some(summary);
        },

        Event::Back => {
            session.phase = session.return_phase;
            session.summary = None;
        },

        Event::CallFailed => {
            if let Some(PendingCall::Articles(_)) = session.in_flight.take() {
                session.phase = Phase::Unauthenticated;
            }
        },

        Event::Logout => {
            *session = Session::default();
        },
    }

    Ok(())
}
