use std::io::Write;

use netcost::config::load_config;
use netcost::pricing::Variable;

#[test]
fn test_missing_file_uses_defaults() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let cfg = load_config(&dir.path().join("absent.toml"))?;

    assert_eq!(cfg.defaults.x, 1000.0);
    assert_eq!(cfg.defaults.range_end, 2000.0);
    assert_eq!(cfg.pricing.school_rate_per_gb, 0.6);
    assert_eq!(cfg.logging.format, "text");
    Ok(())
}

#[test]
fn test_partial_file_overrides_selected_values() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(
        file,
        r#"
[defaults]
variable = "z"
range_start = 100.0
range_end = 9000.0

[pricing]
school_rate_per_gb = 0.5
"#
    )?;

    let cfg = load_config(file.path())?;

    assert_eq!(cfg.defaults.variable, Variable::Z);
    assert_eq!(cfg.defaults.range_start, 100.0);
    assert_eq!(cfg.defaults.range_end, 9000.0);
    assert_eq!(cfg.defaults.x, 1000.0);
    assert_eq!(cfg.pricing.school_rate_per_gb, 0.5);
    assert_eq!(cfg.pricing.currency, "CNY");
    Ok(())
}

#[test]
fn test_invalid_file_is_rejected() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(
        file,
        r#"
[defaults]
range_start = 2000.0
range_end = 500.0
"#
    )?;

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("must be less than"));
    Ok(())
}
