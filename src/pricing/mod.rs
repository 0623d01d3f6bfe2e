//! Cost models for the school network / cybercafe comparison
//!
//! - `calculator`: the two closed-form cost functions and the point comparison
//! - `models`: parameter, variable and recommendation types
//! - `sweep`: evaluation of both models over a linearly sampled range

pub mod calculator;
pub mod models;
pub mod sweep;

pub use calculator::{
    bar_cost, hours_required, recommend, school_cost, CostCalculator, SCHOOL_RATE_PER_GB,
    SECONDS_PER_HOUR,
};
pub use models::{Choice, Parameters, Recommendation, Variable};
pub use sweep::{linspace, sweep, Sweep, SweepRange, DEFAULT_SAMPLES};
