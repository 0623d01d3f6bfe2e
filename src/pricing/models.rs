use serde::{Deserialize, Serialize};
use std::fmt;

/// The three scalar inputs shared by both cost models
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// x: cybercafe price per hour
    pub hourly_rate: f64,
    /// y: download speed in GB/s
    pub speed_gbps: f64,
    /// z: amount of data to download in GB
    pub data_gb: f64,
}

impl Parameters {
    pub fn new(hourly_rate: f64, speed_gbps: f64, data_gb: f64) -> Self {
        Self {
            hourly_rate,
            speed_gbps,
            data_gb,
        }
    }

    /// Value currently held for `variable`
    pub fn get(&self, variable: Variable) -> f64 {
        match variable {
            Variable::X => self.hourly_rate,
            Variable::Y => self.speed_gbps,
            Variable::Z => self.data_gb,
        }
    }

    /// Copy of these parameters with `variable` replaced by `value`
    pub fn with(&self, variable: Variable, value: f64) -> Self {
        let mut params = *self;
        match variable {
            Variable::X => params.hourly_rate = value,
            Variable::Y => params.speed_gbps = value,
            Variable::Z => params.data_gb = value,
        }
        params
    }
}

/// Independent variable of a sweep
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Variable {
    /// Cybercafe hourly rate
    #[default]
    X,
    /// Download speed
    Y,
    /// Data volume
    Z,
}

impl Variable {
    pub const ALL: [Variable; 3] = [Variable::X, Variable::Y, Variable::Z];

    /// Short description used by the variable selector
    pub fn label(&self) -> &'static str {
        match self {
            Variable::X => "x (cybercafe rate)",
            Variable::Y => "y (network speed)",
            Variable::Z => "z (data volume)",
        }
    }

    /// Chart axis title
    pub fn axis_label(&self, currency: &str) -> String {
        match self {
            Variable::X => format!("x ({}/hour)", currency),
            Variable::Y => "y (GB/s)".to_string(),
            Variable::Z => "z (GB)".to_string(),
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Variable::X => Variable::Y,
            Variable::Y => Variable::Z,
            Variable::Z => Variable::X,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Variable::X => Variable::Z,
            Variable::Y => Variable::X,
            Variable::Z => Variable::Y,
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variable::X => "x",
            Variable::Y => "y",
            Variable::Z => "z",
        };
        write!(f, "{}", name)
    }
}

/// Which of the two options is cheaper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    School,
    Bar,
}

impl Choice {
    pub fn display_name(&self) -> &'static str {
        match self {
            Choice::School => "School network",
            Choice::Bar => "Cybercafe",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::School => write!(f, "school"),
            Choice::Bar => write!(f, "bar"),
        }
    }
}

/// Comparison of both models at a single point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub school: f64,
    pub bar: f64,
    /// Whole hours billed at the cybercafe
    pub hours_required: f64,
    pub cheaper: Choice,
    pub savings: f64,
}
