//! Domain models for screening
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Reviewer`] / [`Role`] - Who is screening, and in which pass
//! - [`Article`] - A spreadsheet row assigned for screening
//! - [`Decision`] - Include/exclude plus reason and notes
//! - [`ScreeningPolicy`] - Reason catalog and validation rules
//! - [`Summary`] - Progress counts and decided/pending lists

mod article;
mod decision;
mod reason;
mod role;
mod summary;

pub use article::Article;
pub use decision::{Decision, DecisionKind};
pub use reason::{REASON_OTHER, RoleReasons, ScreeningPolicy};
pub use role::{Reviewer, Role};
pub use summary::{ReviewedArticle, Summary, SummaryCounts};
