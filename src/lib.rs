// Library crate for the playstyle analysis service
// This file exposes the public API for integration tests

pub mod analysis;
pub mod config;
pub mod riot;
pub mod shared;
pub mod stats;
pub mod summary;
pub mod synergy;

// Re-export commonly used types for easier access in tests
pub use analysis::{AnalysisRepository, AnalysisService, InMemoryAnalysisRepository};
pub use config::AppConfig;
pub use riot::{MatchDataSource, RiotClient, RiotId};
pub use shared::{AppError, AppState};
pub use stats::{
    Category, CategoryScores, MasteryRecord, MatchParticipantRecord, PlayerAnalysis, StatsError,
    StatsService,
};
pub use summary::{summarize, SeasonSummary};
pub use synergy::{classify, compare, cosine_similarity, Archetype, ComparisonReport};
