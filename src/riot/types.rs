use serde::{Deserialize, Serialize};

use crate::stats::MatchParticipantRecord;

/// Name + tag + region as typed by a player, e.g. `Faker#KR1` on `kr`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiotId {
    pub game_name: String,
    pub tag_line: String,
    pub region: String,
}

impl RiotId {
    pub fn new(
        game_name: impl Into<String>,
        tag_line: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            game_name: game_name.into(),
            tag_line: tag_line.into(),
            region: region.into(),
        }
    }

    /// `game_name#tag_line#region`
    pub fn store_key(&self) -> String {
        format!("{}#{}#{}", self.game_name, self.tag_line, self.region)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub puuid: String,
    #[serde(default)]
    pub game_name: Option<String>,
    #[serde(default)]
    pub tag_line: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summoner {
    #[serde(default)]
    pub summoner_level: u32,
    #[serde(default)]
    pub profile_icon_id: u32,
}

/// Platform a summoner was found on, with its profile data
#[derive(Debug, Clone, PartialEq)]
pub struct SummonerLocation {
    pub platform: String,
    pub summoner: Summoner,
}

/// Which matches to pull for a player
#[derive(Debug, Clone, PartialEq)]
pub struct MatchWindow {
    /// Epoch seconds; matches before this are ignored
    pub start_time: i64,
    pub max_matches: usize,
    pub queue_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    pub metadata: MatchMetadata,
    pub info: MatchInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadata {
    #[serde(default)]
    pub match_id: String,
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    /// Seconds
    #[serde(default)]
    pub game_duration: u64,
    #[serde(default)]
    pub participants: Vec<ParticipantDto>,
}

/// One participant line. The scoring fields live in `record`; the rest only
/// feed the season summary.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipantDto {
    pub puuid: String,
    pub riot_id_game_name: Option<String>,
    pub riot_id_tagline: Option<String>,

    pub assist_me_pings: u32,
    pub retreat_pings: u32,
    pub enemy_missing_pings: u32,
    pub all_in_pings: u32,

    pub magic_damage_dealt: u64,
    pub physical_damage_dealt: u64,
    pub true_damage_dealt: u64,
    pub magic_damage_taken: u64,
    pub physical_damage_taken: u64,
    pub true_damage_taken: u64,

    pub baron_kills: u32,
    pub dragon_kills: u32,
    pub rift_herald_takedowns: u32,

    pub control_wards_placed: u32,
    pub emotes_used: u32,
    pub triple_kills: u32,
    pub quadra_kills: u32,
    pub penta_kills: u32,

    #[serde(flatten)]
    pub record: MatchParticipantRecord,
}

impl ParticipantDto {
    pub fn new(puuid: impl Into<String>, record: MatchParticipantRecord) -> Self {
        Self {
            puuid: puuid.into(),
            record,
            ..Self::default()
        }
    }
}

impl MatchDto {
    /// Builds a match whose metadata lists the participants in line order
    pub fn new(
        match_id: impl Into<String>,
        game_duration: u64,
        participants: Vec<ParticipantDto>,
    ) -> Self {
        Self {
            metadata: MatchMetadata {
                match_id: match_id.into(),
                participants: participants.iter().map(|p| p.puuid.clone()).collect(),
            },
            info: MatchInfo {
                game_duration,
                participants,
            },
        }
    }

    /// Slot of `puuid` in the participant lines. Falls back to the metadata
    /// order when the lines carry no puuid.
    fn position(&self, puuid: &str) -> Option<usize> {
        self.info
            .participants
            .iter()
            .position(|p| p.puuid == puuid)
            .or_else(|| self.metadata.participants.iter().position(|p| p == puuid))
            .filter(|&idx| idx < self.info.participants.len())
    }

    /// The full line belonging to `puuid`
    pub fn participant_line(&self, puuid: &str) -> Option<&ParticipantDto> {
        self.position(puuid)
            .and_then(|idx| self.info.participants.get(idx))
    }

    /// The line belonging to `puuid`, or `None` when the player is not in
    /// this match.
    pub fn participant(&self, puuid: &str) -> Option<&MatchParticipantRecord> {
        self.participant_line(puuid).map(|p| &p.record)
    }

    /// Everyone else in the player's block of five slots, with their puuid.
    pub fn teammates(&self, puuid: &str) -> Vec<(&str, &ParticipantDto)> {
        let Some(idx) = self.position(puuid) else {
            return Vec::new();
        };
        let team_start = (idx / 5) * 5;
        let team_end = (team_start + 5).min(self.info.participants.len());

        (team_start..team_end)
            .filter(|&slot| slot != idx)
            .filter_map(|slot| {
                let line = self.info.participants.get(slot)?;
                let mate = if line.puuid.is_empty() {
                    self.metadata.participants.get(slot)?.as_str()
                } else {
                    line.puuid.as_str()
                };
                (mate != puuid && !mate.is_empty()).then_some((mate, line))
            })
            .collect()
    }
}
