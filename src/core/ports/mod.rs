//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the screening session and
//! external systems (the remote store, durable local state).
//!
//! Implementations live in the `adapters` module; tests substitute mocks.

mod gateway;
mod session_store;

pub use gateway::{DecisionSubmission, ReviewGateway};
pub use session_store::{SavedLogin, SessionStore};
