use clap::{Parser, Subcommand};
use std::path::PathBuf;

use netcost::pricing::Variable;
use netcost::report::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "netcost",
    version,
    about = "Compare school network and cybercafe download costs"
)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = netcost::config::DEFAULT_CONFIG_FILE, global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Open the interactive cost analyzer (default)
    Ui,

    /// Compare both options for a single set of parameters
    Compare {
        #[command(flatten)]
        params: ParamArgs,
    },

    /// Evaluate both cost curves over a range of one parameter
    Sweep {
        /// Parameter to vary
        #[arg(short, long, value_enum)]
        variable: Option<Variable>,

        /// First value of the range
        #[arg(long)]
        start: Option<f64>,

        /// Last value of the range
        #[arg(long)]
        end: Option<f64>,

        /// Number of evenly spaced samples
        #[arg(short = 'n', long)]
        samples: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,

        #[command(flatten)]
        params: ParamArgs,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

/// Values for x, y and z; unset values fall back to the configured defaults
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ParamArgs {
    /// Cybercafe price per hour
    #[arg(short = 'x', long = "rate", allow_negative_numbers = true)]
    pub x: Option<f64>,

    /// Download speed in GB/s
    #[arg(short = 'y', long = "speed", allow_negative_numbers = true)]
    pub y: Option<f64>,

    /// Data volume in GB
    #[arg(short = 'z', long = "data", allow_negative_numbers = true)]
    pub z: Option<f64>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Ui if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Ui)
    }
}
