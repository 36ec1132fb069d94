use super::super::{DerivedMetrics, RawMetrics, StatsError};

/// Computes rate statistics from folded totals.
///
/// `mastery_points` is the top-N mastery subset; its mean feeds versatility.
pub fn derive(raw: &RawMetrics, mastery_points: &[u64]) -> Result<DerivedMetrics, StatsError> {
    if raw.total_matches == 0 {
        return Err(StatsError::no_matches());
    }

    let matches = raw.total_matches as f64;
    let avg_mastery = if mastery_points.is_empty() {
        0.0
    } else {
        mastery_points.iter().map(|&points| points as f64).sum::<f64>() / mastery_points.len() as f64
    };

    Ok(DerivedMetrics {
        kda: (raw.kills + raw.assists) as f64 / raw.deaths.max(1) as f64,
        avg_damage: raw.damage as f64 / matches,
        win_rate: raw.wins as f64 / matches * 100.0,
        assist_ratio: raw.assists as f64 / raw.kills.max(1) as f64,
        unique_champions: raw.champion_variety.len(),
        avg_mastery,
        avg_creep_score: raw.creep_score as f64 / matches,
        avg_gold: raw.gold as f64 / matches,
        avg_vision_score: raw.vision_score as f64 / matches,
        impact_std_dev: population_std_dev(&raw.per_match_impact),
    })
}

/// Population standard deviation of integer samples.
///
/// Uses exact integer sums, `(n * Σx² - (Σx)²) / n²`, so the result does not
/// depend on sample order.
pub fn population_std_dev(samples: &[i64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    let n = samples.len() as i128;
    let sum: i128 = samples.iter().map(|&x| x as i128).sum();
    let sum_sq: i128 = samples.iter().map(|&x| (x as i128) * (x as i128)).sum();
    let numerator = n * sum_sq - sum * sum;

    (numerator as f64 / (n * n) as f64).sqrt()
}
