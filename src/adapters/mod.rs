//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `http/` - Remote store over HTTP (`reqwest`)
//! - `file/` - Saved login in a TOML file

pub mod file;
pub mod http;

pub use file::FileSessionStore;
pub use http::{HttpGateway, RetryPolicy};
