use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

use super::Archetype;
use crate::stats::Category;

const NOT_APPLICABLE: &str = "N/A";

/// One side of a per-category pairing. A category the player has no score
/// for is reported as `"N/A"`, never as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreEntry {
    Score(f64),
    NotApplicable,
}

impl From<Option<f64>> for ScoreEntry {
    fn from(value: Option<f64>) -> Self {
        value.map_or(ScoreEntry::NotApplicable, ScoreEntry::Score)
    }
}

impl Serialize for ScoreEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ScoreEntry::Score(score) => serializer.serialize_f64(*score),
            ScoreEntry::NotApplicable => serializer.serialize_str(NOT_APPLICABLE),
        }
    }
}

impl<'de> Deserialize<'de> for ScoreEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Score(f64),
            Marker(String),
        }

        match Wire::deserialize(deserializer)? {
            Wire::Score(score) => Ok(ScoreEntry::Score(score)),
            Wire::Marker(marker) if marker == NOT_APPLICABLE => Ok(ScoreEntry::NotApplicable),
            Wire::Marker(other) => Err(de::Error::invalid_value(
                de::Unexpected::Str(&other),
                &"a score or \"N/A\"",
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScorePair {
    pub player1: ScoreEntry,
    pub player2: ScoreEntry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynergyVerdict {
    pub is_complementary: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaystyleSynergy {
    pub player1_archetype: Archetype,
    pub player2_archetype: Archetype,
    pub is_complementary: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynergyReport {
    pub player1: String,
    pub player2: String,
    pub score_comparison: BTreeMap<Category, ScorePair>,
    pub playstyle_synergy: PlaystyleSynergy,
    pub playstyle_similarity_percent: f64,
}

/// Returned instead of a report when either analysis failed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncompleteComparison {
    pub error: String,
    pub player1_status: String,
    pub player2_status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComparisonReport {
    Complete(Box<SynergyReport>),
    Incomplete(IncompleteComparison),
}

impl ComparisonReport {
    pub fn is_complete(&self) -> bool {
        matches!(self, ComparisonReport::Complete(_))
    }

    /// The same comparison seen from the other side: player1 and player2
    /// trade places and the synergy message is rewritten for the new order.
    pub fn swapped(self) -> Self {
        match self {
            ComparisonReport::Complete(report) => {
                let report = *report;
                let verdict = super::check_complementary(
                    report.playstyle_synergy.player2_archetype,
                    report.playstyle_synergy.player1_archetype,
                );
                ComparisonReport::Complete(Box::new(SynergyReport {
                    player1: report.player2,
                    player2: report.player1,
                    score_comparison: report
                        .score_comparison
                        .into_iter()
                        .map(|(category, pair)| {
                            (
                                category,
                                ScorePair {
                                    player1: pair.player2,
                                    player2: pair.player1,
                                },
                            )
                        })
                        .collect(),
                    playstyle_synergy: PlaystyleSynergy {
                        player1_archetype: report.playstyle_synergy.player2_archetype,
                        player2_archetype: report.playstyle_synergy.player1_archetype,
                        is_complementary: verdict.is_complementary,
                        message: verdict.message,
                    },
                    playstyle_similarity_percent: report.playstyle_similarity_percent,
                }))
            }
            ComparisonReport::Incomplete(incomplete) => {
                ComparisonReport::Incomplete(IncompleteComparison {
                    error: incomplete.error,
                    player1_status: incomplete.player2_status,
                    player2_status: incomplete.player1_status,
                })
            }
        }
    }
}
