//! Environment overrides mutate process-global state, so they live in their
//! own test binary with a single test.
use std::io::Write;

use netcost::config::load_config;
use netcost::pricing::Variable;

#[test]
fn test_environment_overrides_file_and_defaults() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(
        file,
        r#"
[defaults]
variable = "z"
samples = 50

[pricing]
school_rate_per_gb = 0.8
"#
    )?;

    std::env::set_var("NETCOST__PRICING__SCHOOL_RATE_PER_GB", "0.5");
    std::env::set_var("NETCOST__DEFAULTS__SAMPLES", "10");
    std::env::set_var("NETCOST__DEFAULTS__VARIABLE", "y");

    let result = load_config(file.path());

    std::env::remove_var("NETCOST__PRICING__SCHOOL_RATE_PER_GB");
    std::env::remove_var("NETCOST__DEFAULTS__SAMPLES");
    std::env::remove_var("NETCOST__DEFAULTS__VARIABLE");

    let cfg = result?;
    assert_eq!(cfg.pricing.school_rate_per_gb, 0.5);
    assert_eq!(cfg.defaults.samples, 10);
    assert_eq!(cfg.defaults.variable, Variable::Y);

    // untouched keys keep the built-in defaults
    assert_eq!(cfg.defaults.x, 1000.0);
    assert_eq!(cfg.pricing.currency, "CNY");
    Ok(())
}
