use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Year-in-review for one player: who they are plus season totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonSummary {
    pub participant: SummaryPlayer,
    pub details: SummaryDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryPlayer {
    pub game_name: String,
    pub tag_line: String,
    pub region: String,
    pub puuid: String,
    pub profile_icon_id: u32,
    pub summoner_level: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDetails {
    pub total_game: u32,
    /// Seconds
    pub total_game_time: u64,
    pub hours_played: f64,
    pub kda: KdaTotals,
    /// Games per champion name
    pub champions: BTreeMap<String, u32>,
    /// Most frequent teammates, most games first
    pub participants: Vec<Teammate>,
    pub winloss: WinLoss,
    pub pings: PingTotals,
    pub minion_killed: u64,
    pub jungle_killed: u64,
    pub legendary_monster_killed: LegendaryMonsters,
    pub total_gold: u64,
    pub vision_score: u64,
    pub control_wards_placed: u64,
    pub emotes_used: u64,
    pub multikills: Multikills,
    pub damage_dealt: DamageBreakdown,
    pub damage_taken: DamageBreakdown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KdaTotals {
    pub kill: u64,
    pub death: u64,
    pub assist: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLoss {
    pub win: u32,
    pub loss: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PingTotals {
    pub assist_me_pings: u64,
    pub retreat_pings: u64,
    pub enemy_missing_pings: u64,
    pub all_in_pings: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendaryMonsters {
    pub baron_kills: u64,
    pub dragon_kills: u64,
    pub rift_herald_takedowns: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Multikills {
    pub triple_kills: u64,
    pub quadra_kills: u64,
    pub penta_kills: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageBreakdown {
    pub magic: u64,
    pub physical: u64,
    #[serde(rename = "true")]
    pub true_damage: u64,
}

impl DamageBreakdown {
    pub fn total(&self) -> u64 {
        self.magic + self.physical + self.true_damage
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teammate {
    pub puuid: String,
    pub name: Option<String>,
    pub tag_line: Option<String>,
    pub games_together: u32,
}
