use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::info;

use netcost::config::{self, Config};

/// Execute the config show command
///
/// Displays the effective configuration after file and environment overrides
pub fn show(path: &Path) -> Result<()> {
    println!("{}", "Loading configuration...".yellow());
    info!(path = %path.display(), "Loading configuration for display");

    let cfg = config::load_config(path)?;

    println!("{}", "Current Configuration:".green().bold());
    println!();

    // Serialize to TOML format
    let toml_string = toml::to_string_pretty(&cfg)?;
    println!("{}", toml_string);

    info!("Configuration displayed successfully");
    Ok(())
}

/// Execute the config validate command
///
/// Validates the configuration file
pub fn validate(path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!(path = %path.display(), "Validating configuration file");

    if !path.exists() {
        println!(
            "{}",
            format!("No file at {}, using built-in defaults", path.display()).dimmed()
        );
    }

    let cfg = config::load_config(path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    for line in summary_lines(&cfg) {
        println!("{}", line);
    }

    info!("Configuration validation successful");
    Ok(())
}

fn summary_lines(cfg: &Config) -> Vec<String> {
    let d = &cfg.defaults;
    vec![
        format!("{}", "Summary:".bold()),
        format!("  Defaults: x={} y={} z={}", d.x, d.y, d.z),
        format!(
            "  Sweep: {} over [{}, {}] with {} samples",
            d.variable, d.range_start, d.range_end, d.samples
        ),
        format!(
            "  School rate: {} {}/GB",
            cfg.pricing.school_rate_per_gb, cfg.pricing.currency
        ),
        format!("  Log Level: {} ({})", cfg.logging.level, cfg.logging.format),
    ]
}
