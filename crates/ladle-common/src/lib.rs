//! Common utilities for the Ladle HTML engine.
//!
//! This crate provides shared infrastructure used by every Ladle component:
//! - **Warning System** - deduplicated diagnostics for unsupported features
//! - **Logging** - subscriber setup for the command-line tools

pub mod logging;
pub mod warning;
