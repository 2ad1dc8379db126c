//! CLI module for the summariser
//!
//! Contains argument parsing and the summarise command.

pub mod args;
pub mod commands;
pub mod completions;

pub use args::Cli;
