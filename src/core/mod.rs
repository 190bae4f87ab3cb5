//! Core screening logic
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Reviewer, Article, Decision, Summary)
//! - `services/` - Session state, transition reducer and navigator
//! - `ports/` - Trait definitions for the remote store and durable state
//! - `error` - Validation, gateway, data and navigation errors

pub mod error;
pub mod models;
pub mod ports;
pub mod services;
