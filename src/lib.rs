//! Claude Credentials
//!
//! This crate persists the Claude AI OAuth token bundle to a JSON file under
//! the user's configuration directory and reads it back for reuse without
//! re-authentication.

pub mod auth;
pub mod config;
