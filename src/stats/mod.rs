pub mod benchmarks;
pub mod calculators;
pub mod collectors;
pub mod service;

mod errors;
pub mod models;

pub use benchmarks::Benchmarks;
pub use collectors::{derive, fold};
pub use errors::StatsError;
pub use models::*;
pub use service::{score, StatsService};

/// One playstyle formula. Implementations read the snapshot in the context
/// and return an unrounded score; the service clamps and rounds.
pub trait ScoreCalculator: Send + Sync {
    fn category(&self) -> Category;

    fn calculate(&self, context: &CalculationContext) -> f64;
}

pub struct CalculationContext<'a> {
    pub raw: &'a RawMetrics,
    pub derived: &'a DerivedMetrics,
    pub benchmarks: &'a Benchmarks,
}

impl<'a> CalculationContext<'a> {
    pub fn new(
        raw: &'a RawMetrics,
        derived: &'a DerivedMetrics,
        benchmarks: &'a Benchmarks,
    ) -> Self {
        Self {
            raw,
            derived,
            benchmarks,
        }
    }
}

/// Rounds to one decimal place, ties to even.
///
/// A tie only counts when `value * 10` lands exactly on `.5`; a product that
/// merely rounds onto `.5` is resolved by the side the exact value lies on.
pub fn round_to_tenth(value: f64) -> f64 {
    let scaled = value * 10.0;
    if (scaled - scaled.trunc()).abs() != 0.5 {
        return scaled.round() / 10.0;
    }

    // exact error of the multiplication above
    let residual = value.mul_add(10.0, -scaled);
    let rounded = if residual > 0.0 {
        scaled.ceil()
    } else if residual < 0.0 {
        scaled.floor()
    } else {
        scaled.round_ties_even()
    };
    rounded / 10.0
}
