use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use playstyle::{
    riot::{
        types::ParticipantDto, Account, MatchDto, MatchWindow, Region, RiotApiError, Summoner,
        SummonerLocation,
    },
    MasteryRecord, MatchDataSource, MatchParticipantRecord, RiotId,
};

// ============================================================================
// Mock Infrastructure
// ============================================================================

#[derive(Clone, Default)]
struct MockPlayer {
    records: Vec<MatchParticipantRecord>,
    masteries: Vec<MasteryRecord>,
}

/// In-process match source keyed by game name
#[derive(Clone, Default)]
pub struct MockMatchSource {
    players: HashMap<String, MockPlayer>,
    match_fetches: Arc<AtomicUsize>,
}

impl MockMatchSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_player(
        mut self,
        game_name: &str,
        records: Vec<MatchParticipantRecord>,
        masteries: Vec<MasteryRecord>,
    ) -> Self {
        self.players
            .insert(game_name.to_string(), MockPlayer { records, masteries });
        self
    }

    /// How many times match history was pulled
    pub fn match_fetches(&self) -> usize {
        self.match_fetches.load(Ordering::SeqCst)
    }

    fn player(&self, puuid: &str) -> Option<&MockPlayer> {
        self.players.get(puuid.trim_start_matches("mock-"))
    }
}

#[async_trait]
impl MatchDataSource for MockMatchSource {
    async fn resolve_account(&self, riot_id: &RiotId) -> Result<Account, RiotApiError> {
        if !self.players.contains_key(&riot_id.game_name) {
            return Err(RiotApiError::NotFound(riot_id.store_key()));
        }
        Ok(Account {
            puuid: format!("mock-{}", riot_id.game_name),
            game_name: Some(riot_id.game_name.clone()),
            tag_line: Some(riot_id.tag_line.clone()),
        })
    }

    async fn locate_summoner(
        &self,
        _puuid: &str,
        region: Region,
    ) -> Result<Option<SummonerLocation>, RiotApiError> {
        Ok(region.platforms().first().map(|platform| SummonerLocation {
            platform: platform.to_string(),
            summoner: Summoner {
                summoner_level: 300,
                profile_icon_id: 29,
            },
        }))
    }

    async fn matches(
        &self,
        puuid: &str,
        _region: Region,
        window: &MatchWindow,
    ) -> Result<Vec<MatchDto>, RiotApiError> {
        self.match_fetches.fetch_add(1, Ordering::SeqCst);
        let records = self
            .player(puuid)
            .map(|p| p.records.clone())
            .unwrap_or_default();

        Ok(records
            .into_iter()
            .take(window.max_matches)
            .enumerate()
            .map(|(i, record)| {
                MatchDto::new(
                    format!("MOCK_{i}"),
                    1500,
                    vec![ParticipantDto::new(puuid, record)],
                )
            })
            .collect())
    }

    async fn top_masteries(
        &self,
        puuid: &str,
        _platform: &str,
        count: usize,
    ) -> Result<Vec<MasteryRecord>, RiotApiError> {
        let mut masteries = self
            .player(puuid)
            .map(|p| p.masteries.clone())
            .unwrap_or_default();
        masteries.truncate(count);
        Ok(masteries)
    }
}
