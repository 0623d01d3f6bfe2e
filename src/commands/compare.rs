use anyhow::Result;
use colored::Colorize;
use tracing::info;

use netcost::{
    config::Config,
    input,
    pricing::{Choice, CostCalculator, Parameters},
    report,
};

use crate::cli::ParamArgs;

/// Execute the compare command
///
/// Evaluates both options at one point and prints the summary
pub fn execute(cfg: &Config, args: &ParamArgs) -> Result<()> {
    let params = resolve_params(cfg, args);
    input::validate_parameters(&params)?;

    let calculator = CostCalculator::from_config(&cfg.pricing);
    let rec = calculator.recommend(&params);

    info!(
        x = params.hourly_rate,
        y = params.speed_gbps,
        z = params.data_gb,
        cheaper = %rec.cheaper,
        savings = rec.savings,
        "Compared costs"
    );

    let lines = report::summary_lines(&rec, &cfg.pricing.currency);
    for (idx, line) in lines.iter().enumerate() {
        match idx {
            0 => println!("{}", line.bold()),
            3 => match rec.cheaper {
                Choice::Bar => println!("{}", line.green()),
                Choice::School => println!("{}", line.cyan()),
            },
            _ => println!("{}", line),
        }
    }

    Ok(())
}

/// Fill unset parameters from the configured defaults
pub fn resolve_params(cfg: &Config, args: &ParamArgs) -> Parameters {
    Parameters::new(
        args.x.unwrap_or(cfg.defaults.x),
        args.y.unwrap_or(cfg.defaults.y),
        args.z.unwrap_or(cfg.defaults.z),
    )
}
