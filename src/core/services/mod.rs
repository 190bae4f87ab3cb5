//! Screening session services
//!
//! - [`session`] - The owned session state value
//! - [`transition`] - Pure reducer over session events
//! - [`navigator`] - Drives the reducer, performing remote calls

pub mod navigator;
pub mod session;
pub mod transition;

pub use navigator::Navigator;
pub use session::{PendingCall, Phase, Progress, Session};
pub use transition::{Event, check, transition};
