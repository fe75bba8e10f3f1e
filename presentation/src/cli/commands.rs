//! CLI command definitions

use clap::Parser;
use logboot_domain::Severity;
use std::path::PathBuf;

/// CLI arguments for logboot
#[derive(Parser, Debug)]
#[command(name = "logboot")]
#[command(author, version, about = "Configure logging once and emit through named loggers")]
#[command(long_about = r#"
logboot applies a logging configuration once per process and hands out
named logger handles.

The configuration file is resolved from (in priority order):
1. --config <path>          Explicit config file
2. $LOGBOOT_CONFIG          Environment override
3. ./config/logging.toml    Project-level config

If no file exists, the built-in fallback is used:
  {timestamp} {level} [{name}] {message}   at info level and above

Example:
  logboot "service started"
  logboot --logger app.db --level debug "pool ready"
  logboot --config ./logging.toml --show-config
"#)]
pub struct Cli {
    /// Message to log
    pub message: Vec<String>,

    /// Logger name (dot-separated, e.g. app.db)
    #[arg(short, long, value_name = "NAME", default_value = "logboot.cli")]
    pub logger: String,

    /// Severity of the message (trace, debug, info, warn, error)
    #[arg(short = 'L', long, value_name = "LEVEL", default_value = "info")]
    pub level: Severity,

    /// Path to logging configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Validate the configuration file and exit
    #[arg(long)]
    pub check: bool,

    /// Show the configuration source and effective settings, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Print --show-config output as JSON
    #[arg(long, requires = "show_config")]
    pub json: bool,
}
