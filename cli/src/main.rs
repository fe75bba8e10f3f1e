//! CLI entrypoint for logboot
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use logboot_infrastructure::default_bootstrap;
use logboot_presentation::{Cli, SettingsFormatter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // === Dependency Injection ===
    // One bootstrap per process; the default path is resolved here.
    let bootstrap = default_bootstrap();
    let config_path = cli.config.as_deref();

    if cli.check || cli.show_config {
        let applied = bootstrap.resolve(config_path).with_context(|| {
            format!(
                "Logging configuration check failed (default path: {})",
                bootstrap.default_path().display()
            )
        })?;

        if cli.show_config {
            if cli.json {
                println!("{}", SettingsFormatter::format_json(&applied));
            } else {
                print!(
                    "{}",
                    SettingsFormatter::format_sources(
                        &applied,
                        config_path,
                        bootstrap.default_path()
                    )
                );
                println!();
                print!("{}", SettingsFormatter::format_settings(&applied));
            }
        } else {
            println!("OK: {}", applied.origin);
        }
        return Ok(());
    }

    let message = cli.message.join(" ");
    if message.is_empty() {
        bail!("Message is required. Use --show-config or --check to inspect the configuration.");
    }

    bootstrap.configure(config_path)?;
    let logger = bootstrap.get_logger(&cli.logger)?;
    logger.log(cli.level, &message);

    Ok(())
}
