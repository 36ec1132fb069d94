use super::super::{benchmarks::FARMING_GOLD_PER_MATCH, CalculationContext, Category, ScoreCalculator};

const CREEP_WEIGHT: f64 = 70.0;
const GOLD_WEIGHT: f64 = 30.0;

/// Creep score carries 70% of farming, gold income the other 30%.
pub struct FarmingCalculator;

impl Default for FarmingCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl FarmingCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl ScoreCalculator for FarmingCalculator {
    fn category(&self) -> Category {
        Category::Farming
    }

    fn calculate(&self, context: &CalculationContext) -> f64 {
        let derived = context.derived;
        let creep = derived.avg_creep_score / context.benchmarks.creep_score_per_match * CREEP_WEIGHT;
        let gold = derived.avg_gold / FARMING_GOLD_PER_MATCH * GOLD_WEIGHT;
        (creep + gold).min(100.0)
    }
}
