//! CLI library components for the reconciliation toolkit.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
