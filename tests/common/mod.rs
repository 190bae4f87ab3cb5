//! Common test utilities shared across test types
//!
//! - `fixtures.rs` - Articles, summaries and canned response bodies
//! - `mocks.rs` - In-memory gateway and login store
//! - `fake_server.rs` - Local HTTP server standing in for the web app

pub mod fake_server;
pub mod fixtures;
pub mod mocks;
