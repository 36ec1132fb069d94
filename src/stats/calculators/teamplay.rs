use super::super::{CalculationContext, Category, ScoreCalculator};

const WIN_RATE_WEIGHT: f64 = 60.0;
const ASSIST_WEIGHT: f64 = 40.0;

pub struct TeamplayCalculator;

impl Default for TeamplayCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl TeamplayCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl ScoreCalculator for TeamplayCalculator {
    fn category(&self) -> Category {
        Category::Teamplay
    }

    fn calculate(&self, context: &CalculationContext) -> f64 {
        let bench = context.benchmarks;
        let wins = context.derived.win_rate / bench.win_rate_percent * WIN_RATE_WEIGHT;
        let assists = context.derived.assist_ratio / bench.assist_ratio * ASSIST_WEIGHT;
        (wins + assists).min(100.0)
    }
}
