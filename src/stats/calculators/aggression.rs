use super::super::{CalculationContext, Category, ScoreCalculator};

/// Even split between KDA and damage output.
pub struct AggressionCalculator;

impl Default for AggressionCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl AggressionCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl ScoreCalculator for AggressionCalculator {
    fn category(&self) -> Category {
        Category::Aggression
    }

    fn calculate(&self, context: &CalculationContext) -> f64 {
        let bench = context.benchmarks;
        let kda = context.derived.kda / bench.kda_good * 50.0;
        let damage = context.derived.avg_damage / bench.damage_per_match * 50.0;
        (kda + damage).min(100.0)
    }
}
