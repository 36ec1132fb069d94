use super::super::{CalculationContext, Category, ScoreCalculator};

/// Champion pool breadth plus depth of top mastery, weighted evenly.
pub struct VersatilityCalculator;

impl Default for VersatilityCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl VersatilityCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl ScoreCalculator for VersatilityCalculator {
    fn category(&self) -> Category {
        Category::Versatility
    }

    fn calculate(&self, context: &CalculationContext) -> f64 {
        let bench = context.benchmarks;
        let pool = context.derived.unique_champions as f64 / bench.unique_champions_good * 50.0;
        let mastery = context.derived.avg_mastery / bench.avg_mastery_good * 50.0;
        (pool + mastery).min(100.0)
    }
}
