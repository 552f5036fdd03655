//! # decklens-core
//!
//! Shared types, errors, configuration, and tracing setup for the Decklens
//! deck-corpus analytics engine.

pub mod config;
pub mod errors;
pub mod logging;
pub mod types;
