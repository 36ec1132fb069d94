use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{models::StoreKey, repository::AnalysisRepository};
use crate::{
    config::AppConfig,
    riot::{Account, MatchDataSource, MatchWindow, Region, RiotApiError, RiotId},
    shared::AppError,
    stats::{PlayerAnalysis, PlayerInfo, PlayerProfile, StatsError, StatsService},
    summary::{summarize, SeasonSummary, SummaryPlayer},
    synergy::{classify, compare, ComparisonReport},
};

pub const PLATFORM_NOT_FOUND: &str = "Unable to resolve platform for this region and player.";
pub const PLAYER_NOT_FOUND: &str = "Player not found";

/// Season-wide knobs the service needs from configuration
#[derive(Debug, Clone)]
pub struct AnalysisSettings {
    pub season_label: String,
    pub window: MatchWindow,
    pub summary_window: MatchWindow,
}

impl AnalysisSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            season_label: config.season_label.clone(),
            window: MatchWindow {
                start_time: config.season_start_epoch,
                max_matches: config.max_matches,
                queue_type: None,
            },
            summary_window: MatchWindow {
                start_time: config.season_start_epoch,
                max_matches: config.summary_max_matches,
                queue_type: None,
            },
        }
    }
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

/// Runs player analyses and comparisons, backed by the result store
pub struct AnalysisService {
    source: Arc<dyn MatchDataSource>,
    repository: Arc<dyn AnalysisRepository>,
    stats: Arc<StatsService>,
    settings: AnalysisSettings,
}

impl AnalysisService {
    pub fn new(
        source: Arc<dyn MatchDataSource>,
        repository: Arc<dyn AnalysisRepository>,
        stats: Arc<StatsService>,
        settings: AnalysisSettings,
    ) -> Self {
        Self {
            source,
            repository,
            stats,
            settings,
        }
    }

    /// Analysis for one player, served from the store when present.
    ///
    /// Only successful profiles are stored; a failed analysis is retried on
    /// the next request.
    #[instrument(skip(self), fields(player = %riot_id.store_key()))]
    pub async fn analyze_player(&self, riot_id: &RiotId) -> Result<PlayerAnalysis, AppError> {
        let key = StoreKey::analysis(riot_id, &self.settings.season_label);

        if let Some(cached) = self.cached::<PlayerAnalysis>(&key).await? {
            debug!("Serving stored analysis");
            return Ok(cached);
        }

        let analysis = self.run_analysis(riot_id).await?;

        if let PlayerAnalysis::Profile(_) = &analysis {
            self.store(&key, &analysis).await?;
            info!("Player analysed and stored");
        } else {
            info!(error = ?analysis.error(), "Player analysis failed");
        }

        Ok(analysis)
    }

    /// Synergy report for two players. `(a, b)` and `(b, a)` share one
    /// stored entry; the report is always returned in request order.
    #[instrument(skip(self), fields(player1 = %first.store_key(), player2 = %second.store_key()))]
    pub async fn compare_players(
        &self,
        first: &RiotId,
        second: &RiotId,
    ) -> Result<ComparisonReport, AppError> {
        let key = StoreKey::comparison(first, second, &self.settings.season_label);
        let reversed = second.store_key() < first.store_key();
        let (canonical_first, canonical_second) = if reversed {
            (second, first)
        } else {
            (first, second)
        };

        let report = match self.cached::<ComparisonReport>(&key).await? {
            Some(cached) => {
                debug!("Serving stored comparison");
                cached
            }
            None => {
                let (analysis1, analysis2) = futures::try_join!(
                    self.analyze_player(canonical_first),
                    self.analyze_player(canonical_second)
                )?;

                let report = compare(&analysis1, &analysis2);
                if report.is_complete() {
                    self.store(&key, &report).await?;
                    info!("Players compared and stored");
                }
                report
            }
        };

        Ok(if reversed { report.swapped() } else { report })
    }

    /// Season totals for one player, served from the store when present.
    ///
    /// A summary is stored once it covers at least one game; an empty season
    /// is recomputed on the next request.
    #[instrument(skip(self), fields(player = %riot_id.store_key()))]
    pub async fn summarize_player(&self, riot_id: &RiotId) -> Result<SeasonSummary, AppError> {
        let key = StoreKey::summary(riot_id, &self.settings.season_label);

        if let Some(cached) = self.cached::<SeasonSummary>(&key).await? {
            debug!("Serving stored summary");
            return Ok(cached);
        }

        let region = Region::parse(&riot_id.region)?;
        let account = self.resolve_account(riot_id).await?;

        let Some(location) = self.source.locate_summoner(&account.puuid, region).await? else {
            return Err(AppError::NotFound(PLATFORM_NOT_FOUND.to_string()));
        };

        let matches = self
            .source
            .matches(&account.puuid, region, &self.settings.summary_window)
            .await?;
        let details = summarize(&account.puuid, &matches);

        let summary = SeasonSummary {
            participant: SummaryPlayer {
                game_name: account
                    .game_name
                    .unwrap_or_else(|| riot_id.game_name.clone()),
                tag_line: account.tag_line.unwrap_or_else(|| riot_id.tag_line.clone()),
                region: riot_id.region.clone(),
                puuid: account.puuid,
                profile_icon_id: location.summoner.profile_icon_id,
                summoner_level: location.summoner.summoner_level,
            },
            details,
        };

        if summary.details.total_game > 0 {
            self.store(&key, &summary).await?;
            info!(games = summary.details.total_game, "Season summarised and stored");
        } else {
            info!("No games this season, summary not stored");
        }

        Ok(summary)
    }

    /// Only a 404 from the account lookup means the player does not exist
    async fn resolve_account(&self, riot_id: &RiotId) -> Result<Account, AppError> {
        match self.source.resolve_account(riot_id).await {
            Ok(account) => {
                debug!(puuid = %account.puuid, "Resolved account");
                Ok(account)
            }
            Err(RiotApiError::NotFound(_)) => Err(AppError::NotFound(PLAYER_NOT_FOUND.to_string())),
            Err(e) => Err(e.into()),
        }
    }

    async fn run_analysis(&self, riot_id: &RiotId) -> Result<PlayerAnalysis, AppError> {
        let region = Region::parse(&riot_id.region)?;
        let account = self.resolve_account(riot_id).await?;

        let Some(location) = self.source.locate_summoner(&account.puuid, region).await? else {
            return Ok(PlayerAnalysis::failed(PLATFORM_NOT_FOUND));
        };
        debug!(platform = %location.platform, "Located summoner");

        let masteries = self
            .source
            .top_masteries(&account.puuid, &location.platform, self.stats.mastery_top_n())
            .await?;
        let records = self
            .source
            .match_records(&account.puuid, region, &self.settings.window)
            .await?;

        let scored = match self.stats.score_player(&records, &masteries) {
            Ok(scored) => scored,
            Err(StatsError::NoData(message)) => return Ok(PlayerAnalysis::failed(message)),
        };

        let archetype = classify(&scored.scores);
        Ok(PlayerAnalysis::Profile(Box::new(PlayerProfile {
            player: PlayerInfo {
                game_name: account
                    .game_name
                    .unwrap_or_else(|| riot_id.game_name.clone()),
                tag_line: account.tag_line.unwrap_or_else(|| riot_id.tag_line.clone()),
                region: riot_id.region.clone(),
                puuid: account.puuid,
                summoner_level: location.summoner.summoner_level,
                profile_icon_id: location.summoner.profile_icon_id,
            },
            metrics: scored.raw,
            derived: scored.derived,
            scores: scored.scores,
            archetype,
            mastery: self.stats.top_mastery(&masteries),
        })))
    }

    /// Reads a stored value; an entry that no longer parses counts as a miss
    async fn cached<T>(&self, key: &StoreKey) -> Result<Option<T>, AppError>
    where
        T: serde::de::DeserializeOwned,
    {
        let Some(stored) = self.repository.get(key).await? else {
            return Ok(None);
        };

        match serde_json::from_value(stored.result) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(error = %e, player = %key.player, "Ignoring unreadable stored result");
                Ok(None)
            }
        }
    }

    async fn store<T: serde::Serialize>(&self, key: &StoreKey, value: &T) -> Result<(), AppError> {
        let json = serde_json::to_value(value).map_err(|e| {
            warn!(error = %e, "Failed to serialize result for storage");
            AppError::Internal
        })?;
        self.repository.put(key, json).await
    }
}
