use anyhow::Result;
use tracing::info;

use netcost::{
    config::Config,
    input,
    pricing::{CostCalculator, Sweep, Variable},
    report::{self, OutputFormat},
};

use crate::cli::ParamArgs;
use crate::commands::compare::resolve_params;

/// Arguments of the sweep command; unset values come from the config
#[derive(Debug, Clone)]
pub struct SweepRequest {
    pub variable: Option<Variable>,
    pub start: Option<f64>,
    pub end: Option<f64>,
    pub samples: Option<usize>,
    pub format: OutputFormat,
    pub params: ParamArgs,
}

/// Execute the sweep command
pub fn execute(cfg: &Config, request: &SweepRequest) -> Result<()> {
    let sweep = run(cfg, request)?;
    let output = report::render_sweep(&sweep, request.format, &cfg.pricing.currency)?;
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// Validate the request and evaluate both curves
pub fn run(cfg: &Config, request: &SweepRequest) -> Result<Sweep> {
    let samples = request.samples.unwrap_or(cfg.defaults.samples);
    if samples < 2 {
        anyhow::bail!("Invalid samples: {}. Must be at least 2", samples);
    }

    let variable = request.variable.unwrap_or(cfg.defaults.variable);
    let params = resolve_params(cfg, &request.params);
    let valid = input::validate_values(
        params.hourly_rate,
        params.speed_gbps,
        params.data_gb,
        request.start.unwrap_or(cfg.defaults.range_start),
        request.end.unwrap_or(cfg.defaults.range_end),
    )?;

    let calculator = CostCalculator::from_config(&cfg.pricing);
    let sweep = calculator.sweep(variable, &valid.params, &valid.range, samples);

    info!(
        variable = %variable,
        start = valid.range.start,
        end = valid.range.end,
        samples,
        "Evaluated sweep"
    );

    Ok(sweep)
}
