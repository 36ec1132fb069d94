use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::synergy::Archetype;

/// One player's line from a completed match, as reported by the match API.
///
/// Absent fields fall back to zero/neutral values rather than failing the
/// whole match; a wrongly-typed field still fails deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchParticipantRecord {
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub total_damage_dealt_to_champions: u64,
    pub gold_earned: u64,
    pub total_minions_killed: u32,
    pub neutral_minions_killed: u32,
    pub vision_score: u32,
    pub win: bool,
    pub champion_name: String,
}

impl Default for MatchParticipantRecord {
    fn default() -> Self {
        Self {
            kills: 0,
            deaths: 0,
            assists: 0,
            total_damage_dealt_to_champions: 0,
            gold_earned: 0,
            total_minions_killed: 0,
            neutral_minions_killed: 0,
            vision_score: 0,
            win: false,
            champion_name: "Unknown".to_string(),
        }
    }
}

impl MatchParticipantRecord {
    /// Minions plus neutral monsters
    pub fn creep_score(&self) -> u64 {
        self.total_minions_killed as u64 + self.neutral_minions_killed as u64
    }

    /// Kills + assists - deaths for this match. May be negative.
    pub fn impact(&self) -> i64 {
        self.kills as i64 + self.assists as i64 - self.deaths as i64
    }
}

/// Per-champion proficiency. Only `champion_points` feeds scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MasteryRecord {
    pub champion_id: i64,
    pub champion_level: u32,
    pub champion_points: u64,
}

/// Running totals over every folded match
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMetrics {
    pub total_matches: u32,
    pub kills: u64,
    pub deaths: u64,
    pub assists: u64,
    pub damage: u64,
    pub gold: u64,
    pub creep_score: u64,
    pub vision_score: u64,
    pub wins: u32,
    pub champion_variety: BTreeSet<String>,
    pub per_match_impact: Vec<i64>,
}

/// Rate statistics computed once from [`RawMetrics`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub kda: f64,
    pub avg_damage: f64,
    pub win_rate: f64,
    pub assist_ratio: f64,
    pub unique_champions: usize,
    pub avg_mastery: f64,
    pub avg_creep_score: f64,
    pub avg_gold: f64,
    pub avg_vision_score: f64,
    pub impact_std_dev: f64,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Farming,
    Vision,
    Aggression,
    Teamplay,
    Consistency,
    Versatility,
}

/// Playstyle scores keyed by category, each in `[0, 100]` with one decimal.
///
/// Scores produced by the scorer always carry all six categories. Maps read
/// back from the store or supplied by callers may be partial.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryScores(BTreeMap<Category, f64>);

impl CategoryScores {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn get(&self, category: Category) -> Option<f64> {
        self.0.get(&category).copied()
    }

    pub fn insert(&mut self, category: Category, score: f64) {
        self.0.insert(category, score);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.0.iter().map(|(category, score)| (*category, *score))
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        Category::iter().all(|category| self.0.contains_key(&category))
    }
}

impl FromIterator<(Category, f64)> for CategoryScores {
    fn from_iter<I: IntoIterator<Item = (Category, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Everything the scoring pipeline produced for one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerScores {
    pub raw: RawMetrics,
    pub derived: DerivedMetrics,
    pub scores: CategoryScores,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub game_name: String,
    pub tag_line: String,
    pub region: String,
    #[serde(default)]
    pub puuid: String,
    #[serde(default)]
    pub summoner_level: u32,
    #[serde(default)]
    pub profile_icon_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub player: PlayerInfo,
    #[serde(default)]
    pub metrics: RawMetrics,
    #[serde(default)]
    pub derived: DerivedMetrics,
    pub scores: CategoryScores,
    #[serde(default)]
    pub archetype: Archetype,
    #[serde(default)]
    pub mastery: Vec<MasteryRecord>,
}

/// Outcome of analysing one player: a scored profile or an error marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlayerAnalysis {
    Profile(Box<PlayerProfile>),
    Failed { error: String },
}

impl PlayerAnalysis {
    pub fn failed(error: impl Into<String>) -> Self {
        PlayerAnalysis::Failed {
            error: error.into(),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PlayerAnalysis::Profile(_) => None,
            PlayerAnalysis::Failed { error } => Some(error),
        }
    }

    pub fn scores(&self) -> Option<&CategoryScores> {
        match self {
            PlayerAnalysis::Profile(profile) => Some(&profile.scores),
            PlayerAnalysis::Failed { .. } => None,
        }
    }

    pub fn game_name(&self) -> Option<&str> {
        match self {
            PlayerAnalysis::Profile(profile) if !profile.player.game_name.is_empty() => {
                Some(&profile.player.game_name)
            }
            _ => None,
        }
    }
}
