//! HTTP adapter for the remote store
//!
//! Implements `ReviewGateway` against the spreadsheet web app: one URL,
//! `action=<operation>` plus operation parameters in the query string.

mod client;
mod wire;

pub use client::{HttpGateway, RetryPolicy};
