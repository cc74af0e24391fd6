//! Weekly activity report CLI library.
//!
//! This crate provides the CLI interface for the weekly report.

mod cli;
pub mod commands;
mod config;

pub use cli::Cli;
pub use config::Config;
