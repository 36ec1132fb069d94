// Public API - what other modules can use
pub use client::RiotClient;
pub use errors::RiotApiError;
pub use routing::Region;
pub use types::{Account, MatchDto, MatchWindow, RiotId, Summoner, SummonerLocation};

// Internal modules
mod client;
mod errors;
mod routing;
pub mod types;

use async_trait::async_trait;
use tracing::warn;

use crate::stats::{MasteryRecord, MatchParticipantRecord};

/// Upstream game data needed to analyse a player.
///
/// Implementations own pagination, rate-limit backoff and routing; the
/// scoring core only ever sees the materialized records.
#[async_trait]
pub trait MatchDataSource: Send + Sync {
    async fn resolve_account(&self, riot_id: &RiotId) -> Result<Account, RiotApiError>;

    /// First platform in the region that knows this player
    async fn locate_summoner(
        &self,
        puuid: &str,
        region: Region,
    ) -> Result<Option<SummonerLocation>, RiotApiError>;

    /// Full match details in the window, newest first. Matches that no
    /// longer exist upstream are left out.
    async fn matches(
        &self,
        puuid: &str,
        region: Region,
        window: &MatchWindow,
    ) -> Result<Vec<MatchDto>, RiotApiError>;

    /// Participant lines for the player, in match-id order. Matches the
    /// player is missing from are left out.
    async fn match_records(
        &self,
        puuid: &str,
        region: Region,
        window: &MatchWindow,
    ) -> Result<Vec<MatchParticipantRecord>, RiotApiError> {
        let matches = self.matches(puuid, region, window).await?;

        Ok(matches
            .iter()
            .filter_map(|m| {
                let record = m.participant(puuid).cloned();
                if record.is_none() {
                    warn!(match_id = %m.metadata.match_id, "Player missing from match, skipping");
                }
                record
            })
            .collect())
    }

    async fn top_masteries(
        &self,
        puuid: &str,
        platform: &str,
        count: usize,
    ) -> Result<Vec<MasteryRecord>, RiotApiError>;
}
