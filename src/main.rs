use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use netcost::{config, init_tracing};

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    // Dispatch to appropriate command handler
    match args.get_command() {
        cli::Commands::Version => {
            println!("netcost v{}", env!("CARGO_PKG_VERSION"));
        }
        cli::Commands::Config { action } => {
            // Config commands report on the file themselves, so logging
            // cannot depend on it loading cleanly
            let _log_guard = init_tracing(&config::LoggingConfig::default(), true);
            match action {
                cli::ConfigCommands::Show => commands::config::show(&args.config)?,
                cli::ConfigCommands::Validate => commands::config::validate(&args.config)?,
            }
        }
        command => {
            let cfg = config::load_config(&args.config)?;

            // The analyzer owns the terminal, so its logs can only go to a file
            let console = !matches!(command, cli::Commands::Ui);
            let _log_guard = init_tracing(&cfg.logging, console);

            match command {
                cli::Commands::Compare { params } => commands::compare::execute(&cfg, &params)?,
                cli::Commands::Sweep {
                    variable,
                    start,
                    end,
                    samples,
                    format,
                    params,
                } => {
                    let request = commands::sweep::SweepRequest {
                        variable,
                        start,
                        end,
                        samples,
                        format,
                        params,
                    };
                    commands::sweep::execute(&cfg, &request)?;
                }
                cli::Commands::Ui => commands::ui::execute(&cfg)?,
                // Handled above
                cli::Commands::Version | cli::Commands::Config { .. } => {}
            }
        }
    }

    Ok(())
}
