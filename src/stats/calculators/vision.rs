use super::super::{CalculationContext, Category, ScoreCalculator};

pub struct VisionCalculator;

impl Default for VisionCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl VisionCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl ScoreCalculator for VisionCalculator {
    fn category(&self) -> Category {
        Category::Vision
    }

    fn calculate(&self, context: &CalculationContext) -> f64 {
        (context.derived.avg_vision_score / context.benchmarks.vision_score_per_match * 100.0)
            .min(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::calculators::test_support::calculate_with;
    use crate::stats::DerivedMetrics;

    #[test]
    fn scales_against_vision_benchmark() {
        let derived = DerivedMetrics {
            avg_vision_score: 30.0,
            ..DerivedMetrics::default()
        };
        assert_eq!(calculate_with(&VisionCalculator::new(), derived), 75.0);
    }

    #[test]
    fn caps_at_one_hundred() {
        let derived = DerivedMetrics {
            avg_vision_score: 95.0,
            ..DerivedMetrics::default()
        };
        assert_eq!(calculate_with(&VisionCalculator::new(), derived), 100.0);
    }
}
