use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

use crate::analysis::{AnalysisRepository, AnalysisService, AnalysisSettings};
use crate::riot::{MatchDataSource, RiotApiError};
use crate::stats::{StatsError, StatsService};

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub match_source: Arc<dyn MatchDataSource>,
    pub analysis_repository: Arc<dyn AnalysisRepository>,
    pub stats_service: Arc<StatsService>,
    pub settings: AnalysisSettings,
}

impl AppState {
    pub fn new(
        match_source: Arc<dyn MatchDataSource>,
        analysis_repository: Arc<dyn AnalysisRepository>,
        stats_service: Arc<StatsService>,
        settings: AnalysisSettings,
    ) -> Self {
        Self {
            match_source,
            analysis_repository,
            stats_service,
            settings,
        }
    }

    /// Service wired to the injected collaborators
    pub fn analysis_service(&self) -> AnalysisService {
        AnalysisService::new(
            Arc::clone(&self.match_source),
            Arc::clone(&self.analysis_repository),
            Arc::clone(&self.stats_service),
            self.settings.clone(),
        )
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error")]
    Internal,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_) | AppError::DatabaseError(_) | AppError::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<RiotApiError> for AppError {
    fn from(error: RiotApiError) -> Self {
        match error {
            RiotApiError::UnknownRegion(region) => {
                AppError::BadRequest(format!("Unknown region: {region}"))
            }
            other => {
                warn!(error = %other, "Riot API call failed");
                AppError::Upstream(other.to_string())
            }
        }
    }
}

impl From<StatsError> for AppError {
    fn from(error: StatsError) -> Self {
        match error {
            StatsError::NoData(msg) => AppError::NotFound(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
pub mod test_utils {
    use super::*;
    use crate::analysis::InMemoryAnalysisRepository;
    use crate::riot::types::ParticipantDto;
    use crate::riot::{Account, MatchDto, MatchWindow, Region, RiotId, Summoner, SummonerLocation};
    use crate::stats::{MasteryRecord, MatchParticipantRecord};
    use async_trait::async_trait;
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicUsize, Ordering};

    const PUUID_PREFIX: &str = "puuid-";

    /// Match source serving canned records per game name.
    ///
    /// Unknown names resolve to `NotFound`; puuids are `puuid-<name>`. Each
    /// record becomes one 30 minute match shared with the player's allies.
    #[derive(Default)]
    pub struct StubMatchDataSource {
        players: HashMap<String, Vec<MatchParticipantRecord>>,
        allies: HashMap<String, Vec<String>>,
        unlocated: HashSet<String>,
        account_calls: Arc<AtomicUsize>,
    }

    impl StubMatchDataSource {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_player(mut self, game_name: &str, records: Vec<MatchParticipantRecord>) -> Self {
            self.players.insert(game_name.to_string(), records);
            self
        }

        /// Names queued alongside the player in every match
        pub fn with_allies(mut self, game_name: &str, allies: &[&str]) -> Self {
            self.allies.insert(
                game_name.to_string(),
                allies.iter().map(|a| a.to_string()).collect(),
            );
            self
        }

        /// Player resolves but no platform in the region knows them
        pub fn without_platform(mut self, game_name: &str) -> Self {
            self.unlocated.insert(game_name.to_string());
            self
        }

        /// Counter of `resolve_account` calls, shared with the source
        pub fn account_calls(&self) -> Arc<AtomicUsize> {
            Arc::clone(&self.account_calls)
        }

        fn name_of<'a>(&self, puuid: &'a str) -> &'a str {
            puuid.strip_prefix(PUUID_PREFIX).unwrap_or(puuid)
        }
    }

    #[async_trait]
    impl MatchDataSource for StubMatchDataSource {
        async fn resolve_account(&self, riot_id: &RiotId) -> Result<Account, RiotApiError> {
            self.account_calls.fetch_add(1, Ordering::SeqCst);
            if !self.players.contains_key(&riot_id.game_name) {
                return Err(RiotApiError::NotFound(riot_id.store_key()));
            }
            Ok(Account {
                puuid: format!("{PUUID_PREFIX}{}", riot_id.game_name),
                game_name: Some(riot_id.game_name.clone()),
                tag_line: Some(riot_id.tag_line.clone()),
            })
        }

        async fn locate_summoner(
            &self,
            puuid: &str,
            region: Region,
        ) -> Result<Option<SummonerLocation>, RiotApiError> {
            if self.unlocated.contains(self.name_of(puuid)) {
                return Ok(None);
            }
            Ok(Some(SummonerLocation {
                platform: region.platforms()[0].to_string(),
                summoner: Summoner {
                    summoner_level: 120,
                    profile_icon_id: 7,
                },
            }))
        }

        async fn matches(
            &self,
            puuid: &str,
            _region: Region,
            window: &MatchWindow,
        ) -> Result<Vec<MatchDto>, RiotApiError> {
            let name = self.name_of(puuid);
            let records = self.players.get(name).cloned().unwrap_or_default();
            let allies = self.allies.get(name).cloned().unwrap_or_default();

            Ok(records
                .into_iter()
                .take(window.max_matches)
                .enumerate()
                .map(|(i, record)| {
                    let mut lines = vec![ParticipantDto::new(puuid, record)];
                    lines.extend(allies.iter().map(|ally| ParticipantDto {
                        riot_id_game_name: Some(ally.clone()),
                        ..ParticipantDto::new(
                            format!("{PUUID_PREFIX}{ally}"),
                            MatchParticipantRecord::default(),
                        )
                    }));
                    MatchDto::new(format!("STUB_{i}"), 1800, lines)
                })
                .collect())
        }

        async fn top_masteries(
            &self,
            _puuid: &str,
            _platform: &str,
            count: usize,
        ) -> Result<Vec<MasteryRecord>, RiotApiError> {
            Ok((0..count as i64)
                .map(|id| MasteryRecord {
                    champion_id: id + 1,
                    champion_level: 7,
                    champion_points: 40_000,
                })
                .collect())
        }
    }

    /// Builder for creating AppState with overrides for testing
    pub struct AppStateBuilder {
        match_source: Option<Arc<dyn MatchDataSource>>,
        analysis_repository: Option<Arc<dyn AnalysisRepository>>,
        stats_service: Option<Arc<StatsService>>,
    }

    impl AppStateBuilder {
        pub fn new() -> Self {
            Self {
                match_source: None,
                analysis_repository: None,
                stats_service: None,
            }
        }

        pub fn with_match_source(mut self, source: Arc<dyn MatchDataSource>) -> Self {
            self.match_source = Some(source);
            self
        }

        pub fn with_repository(mut self, repo: Arc<dyn AnalysisRepository>) -> Self {
            self.analysis_repository = Some(repo);
            self
        }

        pub fn with_stats_service(mut self, service: Arc<StatsService>) -> Self {
            self.stats_service = Some(service);
            self
        }

        pub fn build(self) -> AppState {
            AppState {
                match_source: self
                    .match_source
                    .unwrap_or_else(|| Arc::new(StubMatchDataSource::new())),
                analysis_repository: self
                    .analysis_repository
                    .unwrap_or_else(|| Arc::new(InMemoryAnalysisRepository::new())),
                stats_service: self.stats_service.unwrap_or_default(),
                settings: AnalysisSettings::default(),
            }
        }
    }

    impl Default for AppStateBuilder {
        fn default() -> Self {
            Self::new()
        }
    }
}
