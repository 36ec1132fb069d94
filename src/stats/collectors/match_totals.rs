use super::super::{MatchParticipantRecord, RawMetrics};

impl RawMetrics {
    /// Folds one match into the running totals.
    pub fn record(&mut self, record: &MatchParticipantRecord) {
        self.total_matches += 1;
        self.kills += record.kills as u64;
        self.deaths += record.deaths as u64;
        self.assists += record.assists as u64;
        self.damage += record.total_damage_dealt_to_champions;
        self.gold += record.gold_earned;
        self.creep_score += record.creep_score();
        self.vision_score += record.vision_score as u64;
        if record.win {
            self.wins += 1;
        }
        self.champion_variety.insert(record.champion_name.clone());
        self.per_match_impact.push(record.impact());
    }
}

/// Accumulates every record, in input order, into fresh totals.
///
/// An empty slice is a valid input and yields all-zero totals; callers
/// check `total_matches` before deriving rates.
pub fn fold(records: &[MatchParticipantRecord]) -> RawMetrics {
    records
        .iter()
        .fold(RawMetrics::default(), |mut metrics, record| {
            metrics.record(record);
            metrics
        })
}
