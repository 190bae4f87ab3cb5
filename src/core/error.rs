//! Error taxonomy for screening sessions
//!
//! None of these are fatal: every failed action leaves the session in the
//! state it was in before the action.

use std::time::Duration;

use thiserror::Error;

use super::models::DecisionKind;

/// Input the reviewer can correct locally; no remote call was made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Login without a reviewer name
    #[error("please select your name before starting")]
    MissingReviewer,

    /// Decision without a reason
    #[error("please select a reason for the {kind} decision")]
    MissingReason {
        /// Outcome the reason was missing for
        kind: DecisionKind,
    },

    /// Reason not in the catalog for this role and outcome
    #[error("'{reason}' is not a valid {kind} reason")]
    UnknownReason {
        /// Reason as entered
        reason: String,
        /// Outcome it was entered for
        kind: DecisionKind,
    },

    /// Reason "other" without notes
    #[error("please provide notes when the reason is \"other\"")]
    NotesRequired,
}

/// A response that did not have the expected shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// Body was not valid JSON
    #[error("invalid JSON in response: {0}")]
    InvalidJson(String),

    /// Expected field missing from the response
    #[error("response is missing '{0}'")]
    MissingField(&'static str),

    /// Field present but with the wrong shape
    #[error("unexpected '{field}' in response: {message}")]
    InvalidField {
        /// Field name
        field: &'static str,
        /// Deserializer message
        message: String,
    },
}

/// Failure talking to the remote store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Connection failure
    #[error("failed to connect to server: {0}")]
    Transport(String),

    /// The server answered with a non-success HTTP status
    #[error("server responded with HTTP {0}")]
    Status(u16),

    /// No response within the configured bound
    #[error("request timed out after {}s - please check your connection", .0.as_secs())]
    Timeout(Duration),

    /// The store answered with an `error` field
    #[error("server reported an error: {0}")]
    Remote(String),

    /// The store answered with something we could not read
    #[error(transparent)]
    Data(#[from] DataError),
}

impl GatewayError {
    /// Whether retrying the same request may succeed
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::Transport(_) | Self::Timeout(_) => true,
            Self::Status(code) => *code == 429 || *code >= 500,
            Self::Remote(_) | Self::Data(_) => false,
        }
    }
}

/// An event that the session cannot accept in its current phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Action needs a logged-in reviewer
    #[error("not logged in")]
    NotLoggedIn,

    /// Action is not valid in the current phase
    #[error("cannot {action} while {phase}")]
    NotAllowed {
        /// Attempted action
        action: &'static str,
        /// Current phase
        phase: &'static str,
    },

    /// A remote call is still outstanding
    #[error("please wait for the current request to finish")]
    Busy,

    /// Skip on the final article
    #[error("this is the last article; you cannot skip further")]
    LastArticle,
}

/// Any error surfaced by a screening session
#[derive(Debug, Error)]
pub enum ScreeningError {
    /// Local validation failed
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Remote call failed
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Event rejected by the state machine
    #[error(transparent)]
    Navigation(#[from] NavigationError),

    /// Durable local state could not be read or written
    #[error("local storage error: {0}")]
    Storage(String),
}

impl From<DataError> for ScreeningError {
    fn from(err: DataError) -> Self {
        Self::Gateway(GatewayError::Data(err))
    }
}
