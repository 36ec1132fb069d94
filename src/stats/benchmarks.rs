use serde::{Deserialize, Serialize};

/// Gold per match that counts as a full farming gold contribution.
/// Kept apart from [`Benchmarks`] since it only weights the farming formula.
pub const FARMING_GOLD_PER_MATCH: f64 = 12_000.0;

/// Normalization targets the category formulas divide by.
///
/// These are tuned constants, not derived from data. A score of 100 in a
/// single-factor category means the player met the benchmark on average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Benchmarks {
    pub creep_score_per_match: f64,
    pub vision_score_per_match: f64,
    pub kda_good: f64,
    pub damage_per_match: f64,
    pub win_rate_percent: f64,
    pub assist_ratio: f64,
    pub impact_std_max: f64,
    pub unique_champions_good: f64,
    pub avg_mastery_good: f64,
}

impl Benchmarks {
    pub const fn standard() -> Self {
        Self {
            creep_score_per_match: 150.0,
            vision_score_per_match: 40.0,
            kda_good: 3.0,
            damage_per_match: 20_000.0,
            win_rate_percent: 50.0,
            assist_ratio: 1.5,
            impact_std_max: 10.0,
            unique_champions_good: 5.0,
            avg_mastery_good: 50_000.0,
        }
    }
}

impl Default for Benchmarks {
    fn default() -> Self {
        Self::standard()
    }
}
