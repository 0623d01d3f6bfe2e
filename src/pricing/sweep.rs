use serde::{Deserialize, Serialize};

use crate::pricing::calculator::CostCalculator;
use crate::pricing::models::{Parameters, Variable};

/// Number of samples drawn across a sweep range
pub const DEFAULT_SAMPLES: usize = 100;

/// Closed interval swept by the chosen variable
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRange {
    pub start: f64,
    pub end: f64,
}

impl SweepRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
}

/// Both cost curves, index-aligned with `samples`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sweep {
    pub variable: Variable,
    pub samples: Vec<f64>,
    pub school: Vec<f64>,
    pub bar: Vec<f64>,
}

impl Sweep {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// (sample, school cost, bar cost) triples in sample order
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.samples
            .iter()
            .zip(&self.school)
            .zip(&self.bar)
            .map(|((&sample, &school), &bar)| (sample, school, bar))
    }

    pub fn school_points(&self) -> Vec<(f64, f64)> {
        self.samples.iter().copied().zip(self.school.iter().copied()).collect()
    }

    pub fn bar_points(&self) -> Vec<(f64, f64)> {
        self.samples.iter().copied().zip(self.bar.iter().copied()).collect()
    }

    /// Smallest and largest cost over both curves, `None` when empty
    pub fn cost_bounds(&self) -> Option<(f64, f64)> {
        self.school
            .iter()
            .chain(&self.bar)
            .copied()
            .filter(|cost| cost.is_finite())
            .fold(None, |acc, cost| match acc {
                None => Some((cost, cost)),
                Some((lo, hi)) => Some((lo.min(cost), hi.max(cost))),
            })
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive.
///
/// The last value is exactly `end`. `n == 1` yields `[start]`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            values[n - 1] = end;
            values
        }
    }
}

/// Sweep with the standard school rate
pub fn sweep(variable: Variable, params: &Parameters, range: &SweepRange, samples: usize) -> Sweep {
    CostCalculator::default().sweep(variable, params, range, samples)
}
