use super::super::{CalculationContext, Category, ScoreCalculator};

/// Inverted spread of per-match impact: steady players score high.
pub struct ConsistencyCalculator;

impl Default for ConsistencyCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsistencyCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl ScoreCalculator for ConsistencyCalculator {
    fn category(&self) -> Category {
        Category::Consistency
    }

    fn calculate(&self, context: &CalculationContext) -> f64 {
        let spread = context.derived.impact_std_dev / context.benchmarks.impact_std_max * 100.0;
        (100.0 - spread).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::calculators::test_support::calculate_with;
    use crate::stats::DerivedMetrics;

    #[test]
    fn zero_spread_is_perfect() {
        let score = calculate_with(&ConsistencyCalculator::new(), DerivedMetrics::default());
        assert_eq!(score, 100.0);
    }

    #[test]
    fn spread_reduces_score() {
        let derived = DerivedMetrics {
            impact_std_dev: 4.0,
            ..DerivedMetrics::default()
        };
        assert_eq!(calculate_with(&ConsistencyCalculator::new(), derived), 60.0);
    }

    #[test]
    fn floors_at_zero() {
        let derived = DerivedMetrics {
            impact_std_dev: 25.0,
            ..DerivedMetrics::default()
        };
        assert_eq!(calculate_with(&ConsistencyCalculator::new(), derived), 0.0);
    }
}
