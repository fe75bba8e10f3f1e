//! Presentation layer for logboot
//!
//! This crate contains the CLI definition and the console output used to
//! inspect the resolved logging configuration.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::SettingsFormatter;
