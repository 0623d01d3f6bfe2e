//! Form input validation
//!
//! The five text fields are parsed and checked together. Any failure is a
//! single `AppError::InvalidInput`; nothing is evaluated until all five pass.

use crate::config::DefaultsConfig;
use crate::error::AppError;
use crate::pricing::{Parameters, SweepRange};

/// Raw text of the form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub x: String,
    pub y: String,
    pub z: String,
    pub start: String,
    pub end: String,
}

impl FormInput {
    pub fn from_defaults(defaults: &DefaultsConfig) -> Self {
        Self {
            x: defaults.x.to_string(),
            y: defaults.y.to_string(),
            z: defaults.z.to_string(),
            start: defaults.range_start.to_string(),
            end: defaults.range_end.to_string(),
        }
    }
}

/// Inputs that passed validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedInput {
    pub params: Parameters,
    pub range: SweepRange,
}

/// Parse and validate the form
pub fn validate(form: &FormInput) -> Result<ValidatedInput, AppError> {
    let x = parse_field("x", &form.x)?;
    let y = parse_field("y", &form.y)?;
    let z = parse_field("z", &form.z)?;
    let start = parse_field("start", &form.start)?;
    let end = parse_field("end", &form.end)?;

    validate_values(x, y, z, start, end)
}

/// Validate already-numeric inputs
pub fn validate_values(
    x: f64,
    y: f64,
    z: f64,
    start: f64,
    end: f64,
) -> Result<ValidatedInput, AppError> {
    let params = Parameters::new(x, y, z);
    validate_parameters(&params)?;

    require_positive("start", start)?;
    require_positive("end", end)?;
    if start >= end {
        return Err(AppError::InvalidInput(format!(
            "start ({}) must be less than end ({})",
            start, end
        )));
    }

    Ok(ValidatedInput {
        params,
        range: SweepRange::new(start, end),
    })
}

/// Check x, y and z on their own, for single-point comparisons
pub fn validate_parameters(params: &Parameters) -> Result<(), AppError> {
    require_positive("x", params.hourly_rate)?;
    require_positive("y", params.speed_gbps)?;
    require_positive("z", params.data_gb)?;
    Ok(())
}

fn parse_field(name: &str, text: &str) -> Result<f64, AppError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("{} is not a number: '{}'", name, text)))?;

    if !value.is_finite() {
        return Err(AppError::InvalidInput(format!(
            "{} is not a finite number: '{}'",
            name, text
        )));
    }

    Ok(value)
}

fn require_positive(name: &str, value: f64) -> Result<(), AppError> {
    // NaN fails the comparison and is rejected here too
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!(
            "{} must be a positive number, got {}",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(x: &str, y: &str, z: &str, start: &str, end: &str) -> FormInput {
        FormInput {
            x: x.to_string(),
            y: y.to_string(),
            z: z.to_string(),
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        let input = validate(&form("1000", "1", "5000", "500", "2000")).unwrap();
        assert_eq!(input.params, Parameters::new(1000.0, 1.0, 5000.0));
        assert_eq!(input.range, SweepRange::new(500.0, 2000.0));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert!(validate(&form(" 1000 ", "1", "5000\t", "500", "2000")).is_ok());
    }

    #[test]
    fn test_non_numeric_rejected() {
        for bad in ["", "abc", "1,000", "nan", "inf", "-inf"] {
            let err = validate(&form(bad, "1", "5000", "500", "2000")).unwrap_err();
            assert!(err.is_invalid_input(), "expected rejection for {:?}", bad);
        }
    }

    #[test]
    fn test_non_positive_rejected_in_every_field() {
        for value in ["0", "-1", "-0.5"] {
            assert!(validate(&form(value, "1", "5000", "500", "2000")).is_err());
            assert!(validate(&form("1000", value, "5000", "500", "2000")).is_err());
            assert!(validate(&form("1000", "1", value, "500", "2000")).is_err());
            assert!(validate(&form("1000", "1", "5000", value, "2000")).is_err());
            assert!(validate(&form("1000", "1", "5000", "500", value)).is_err());
        }
    }

    #[test]
    fn test_start_must_be_less_than_end() {
        assert!(validate(&form("1000", "1", "5000", "2000", "2000")).is_err());
        assert!(validate(&form("1000", "1", "5000", "2001", "2000")).is_err());
        assert!(validate(&form("1000", "1", "5000", "1999.5", "2000")).is_ok());
    }

    #[test]
    fn test_validate_parameters_rejects_nan() {
        assert!(validate_parameters(&Parameters::new(f64::NAN, 1.0, 1.0)).is_err());
        assert!(validate_parameters(&Parameters::new(1.0, 1.0, 1.0)).is_ok());
    }

    #[test]
    fn test_from_defaults_round_trips_through_validation() {
        let input = validate(&FormInput::from_defaults(&DefaultsConfig::default())).unwrap();
        assert_eq!(input.params, Parameters::new(1000.0, 1.0, 5000.0));
        assert_eq!(input.range, SweepRange::new(500.0, 2000.0));
    }
}
