use crate::config::PricingConfig;
use crate::pricing::models::{Choice, Parameters, Recommendation, Variable};
use crate::pricing::sweep::{linspace, Sweep, SweepRange};
use tracing::debug;

/// School network price per GB
pub const SCHOOL_RATE_PER_GB: f64 = 0.6;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// School network cost for `data_gb` of traffic
pub fn school_cost(data_gb: f64) -> f64 {
    SCHOOL_RATE_PER_GB * data_gb
}

/// Hours billed at the cybercafe, rounded up to whole hours
///
/// `speed_gbps` must be positive; validation upstream guarantees it.
pub fn hours_required(speed_gbps: f64, data_gb: f64) -> f64 {
    (data_gb / (speed_gbps * SECONDS_PER_HOUR)).ceil()
}

/// Cybercafe cost: hourly rate times whole hours needed for the download
pub fn bar_cost(hourly_rate: f64, speed_gbps: f64, data_gb: f64) -> f64 {
    hourly_rate * hours_required(speed_gbps, data_gb)
}

/// Compare both models at one point with the standard school rate
pub fn recommend(params: &Parameters) -> Recommendation {
    CostCalculator::default().recommend(params)
}

/// Evaluates both cost models with a configurable school network rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostCalculator {
    school_rate_per_gb: f64,
}

impl Default for CostCalculator {
    fn default() -> Self {
        Self::new(SCHOOL_RATE_PER_GB)
    }
}

impl CostCalculator {
    /// Create a new cost calculator
    pub fn new(school_rate_per_gb: f64) -> Self {
        Self { school_rate_per_gb }
    }

    pub fn from_config(pricing: &PricingConfig) -> Self {
        Self::new(pricing.school_rate_per_gb)
    }

    pub fn school_cost(&self, data_gb: f64) -> f64 {
        self.school_rate_per_gb * data_gb
    }

    /// The cybercafe model has no configurable rate; this matches [`bar_cost`].
    pub fn bar_cost(&self, hourly_rate: f64, speed_gbps: f64, data_gb: f64) -> f64 {
        bar_cost(hourly_rate, speed_gbps, data_gb)
    }

    /// Evaluate both models at `params` and pick the cheaper one.
    /// Ties go to the school network.
    pub fn recommend(&self, params: &Parameters) -> Recommendation {
        let school = self.school_cost(params.data_gb);
        let bar = self.bar_cost(params.hourly_rate, params.speed_gbps, params.data_gb);
        let cheaper = if bar < school {
            Choice::Bar
        } else {
            Choice::School
        };

        Recommendation {
            school,
            bar,
            hours_required: hours_required(params.speed_gbps, params.data_gb),
            cheaper,
            savings: (bar - school).abs(),
        }
    }

    /// Sample `variable` over `range` and evaluate both models at each sample,
    /// holding the other two parameters at their values in `params`.
    pub fn sweep(
        &self,
        variable: Variable,
        params: &Parameters,
        range: &SweepRange,
        samples: usize,
    ) -> Sweep {
        let values = linspace(range.start, range.end, samples);
        let mut school = Vec::with_capacity(values.len());
        let mut bar = Vec::with_capacity(values.len());

        for &value in &values {
            let point = params.with(variable, value);
            school.push(self.school_cost(point.data_gb));
            bar.push(self.bar_cost(point.hourly_rate, point.speed_gbps, point.data_gb));
        }

        debug!(
            variable = %variable,
            start = range.start,
            end = range.end,
            samples = values.len(),
            "Evaluated cost sweep"
        );

        Sweep {
            variable,
            samples: values,
            school,
            bar,
        }
    }
}
