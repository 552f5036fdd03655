//! # decklens-analysis
//!
//! The aggregation engine: deck-export normalization, corpus loading,
//! corpus-wide usage statistics, win-rate-weighted power scores, and the
//! tag assignments fed to the persisted catalog.

pub mod corpus;
pub mod normalizer;
pub mod power;
pub mod tags;
pub mod usage;
