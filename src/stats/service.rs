use std::sync::Arc;

use tracing::{debug, instrument};

use super::{
    calculators::{
        AggressionCalculator, ConsistencyCalculator, FarmingCalculator, TeamplayCalculator,
        VersatilityCalculator, VisionCalculator,
    },
    collectors::{derive, fold},
    round_to_tenth, Benchmarks, CalculationContext, CategoryScores, DerivedMetrics,
    MasteryRecord, MatchParticipantRecord, PlayerScores, RawMetrics, ScoreCalculator, StatsError,
};

pub const DEFAULT_MASTERY_TOP_N: usize = 5;

/// Runs the scoring pipeline: fold, derive, then every registered calculator.
pub struct StatsService {
    calculators: Vec<Arc<dyn ScoreCalculator>>,
    benchmarks: Benchmarks,
    mastery_top_n: usize,
}

impl Default for StatsService {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl StatsService {
    pub fn builder() -> StatsServiceBuilder {
        StatsServiceBuilder::new()
    }

    pub fn benchmarks(&self) -> &Benchmarks {
        &self.benchmarks
    }

    pub fn mastery_top_n(&self) -> usize {
        self.mastery_top_n
    }

    /// Applies each calculator, clamping to `[0, 100]` and rounding to one
    /// decimal independently per category.
    pub fn score(&self, raw: &RawMetrics, derived: &DerivedMetrics) -> CategoryScores {
        let context = CalculationContext::new(raw, derived, &self.benchmarks);

        let mut scores = CategoryScores::new();
        for calculator in &self.calculators {
            let value = calculator.calculate(&context).clamp(0.0, 100.0);
            scores.insert(calculator.category(), round_to_tenth(value));
        }
        scores
    }

    /// Scores one player from their match lines and mastery records.
    ///
    /// Returns [`StatsError::NoData`] when there are no match records.
    #[instrument(skip_all, fields(matches = match_records.len(), masteries = mastery_records.len()))]
    pub fn score_player(
        &self,
        match_records: &[MatchParticipantRecord],
        mastery_records: &[MasteryRecord],
    ) -> Result<PlayerScores, StatsError> {
        let raw = fold(match_records);
        let mastery_points: Vec<u64> = self
            .top_mastery(mastery_records)
            .iter()
            .map(|record| record.champion_points)
            .collect();

        let derived = derive(&raw, &mastery_points)?;
        let scores = self.score(&raw, &derived);

        debug!(
            total_matches = raw.total_matches,
            unique_champions = derived.unique_champions,
            ?scores,
            "Scored player"
        );

        Ok(PlayerScores {
            raw,
            derived,
            scores,
        })
    }

    /// Highest-point mastery records, at most `mastery_top_n` of them.
    pub fn top_mastery(&self, records: &[MasteryRecord]) -> Vec<MasteryRecord> {
        let mut sorted = records.to_vec();
        sorted.sort_by(|a, b| b.champion_points.cmp(&a.champion_points));
        sorted.truncate(self.mastery_top_n);
        sorted
    }
}

/// Scores with the standard benchmark table and calculators.
pub fn score(raw: &RawMetrics, derived: &DerivedMetrics) -> CategoryScores {
    StatsService::default().score(raw, derived)
}

pub struct StatsServiceBuilder {
    calculators: Vec<Arc<dyn ScoreCalculator>>,
    benchmarks: Benchmarks,
    mastery_top_n: usize,
}

impl StatsServiceBuilder {
    fn new() -> Self {
        Self {
            calculators: vec![
                Arc::new(FarmingCalculator::new()),
                Arc::new(VisionCalculator::new()),
                Arc::new(AggressionCalculator::new()),
                Arc::new(TeamplayCalculator::new()),
                Arc::new(ConsistencyCalculator::new()),
                Arc::new(VersatilityCalculator::new()),
            ],
            benchmarks: Benchmarks::default(),
            mastery_top_n: DEFAULT_MASTERY_TOP_N,
        }
    }

    /// Registers an extra calculator. A calculator for a category that is
    /// already registered replaces the earlier one's output.
    pub fn with_calculator(mut self, calculator: Arc<dyn ScoreCalculator>) -> Self {
        self.calculators.push(calculator);
        self
    }

    pub fn with_benchmarks(mut self, benchmarks: Benchmarks) -> Self {
        self.benchmarks = benchmarks;
        self
    }

    pub fn with_mastery_top_n(mut self, top_n: usize) -> Self {
        self.mastery_top_n = top_n;
        self
    }

    pub fn build(self) -> StatsService {
        StatsService {
            calculators: self.calculators,
            benchmarks: self.benchmarks,
            mastery_top_n: self.mastery_top_n,
        }
    }
}
