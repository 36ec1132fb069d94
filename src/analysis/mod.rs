// Public API - what other modules can use
pub use agent::{AgentEvent, AgentResponse};
pub use handlers::{analyze_player, compare_players, health, invoke_agent, summarize_player};
pub use models::{StoreKey, StoredResult};
pub use repository::{AnalysisRepository, InMemoryAnalysisRepository, PostgresAnalysisRepository};
pub use service::{AnalysisService, AnalysisSettings, PLATFORM_NOT_FOUND, PLAYER_NOT_FOUND};

// Internal modules
pub mod agent;
mod handlers;
pub mod models;
pub mod repository;
mod service;
pub mod types;
