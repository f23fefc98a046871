//! CLI library components for depmerge.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod types;
