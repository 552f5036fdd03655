//! # decklens-cli
//!
//! The batch surface: resolves configuration, runs the pipeline end to
//! end, and writes the run summary.

pub mod pipeline;
