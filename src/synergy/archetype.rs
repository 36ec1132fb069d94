use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::stats::{Category, CategoryScores};

/// Tie-break order for classification, and the fixed axis order of the
/// similarity vector.
pub const ARCHETYPE_PRIORITY: [Category; 6] = [
    Category::Aggression,
    Category::Farming,
    Category::Teamplay,
    Category::Vision,
    Category::Versatility,
    Category::Consistency,
];

/// Dominant playstyle label
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
pub enum Archetype {
    #[serde(rename = "Carry/Farmer")]
    #[strum(serialize = "Carry/Farmer")]
    CarryFarmer,
    #[serde(rename = "Aggressor/Slayer")]
    #[strum(serialize = "Aggressor/Slayer")]
    AggressorSlayer,
    #[serde(rename = "Support/Team Player")]
    #[strum(serialize = "Support/Team Player")]
    SupportTeamPlayer,
    #[serde(rename = "Vision Setter/Support")]
    #[strum(serialize = "Vision Setter/Support")]
    VisionSetter,
    #[serde(rename = "Consistent Rock")]
    #[strum(serialize = "Consistent Rock")]
    ConsistentRock,
    #[serde(rename = "Flexible/Jack-of-all-Trades")]
    #[strum(serialize = "Flexible/Jack-of-all-Trades")]
    Flexible,
    #[default]
    Unknown,
}

impl Archetype {
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Farming => Archetype::CarryFarmer,
            Category::Aggression => Archetype::AggressorSlayer,
            Category::Teamplay => Archetype::SupportTeamPlayer,
            Category::Vision => Archetype::VisionSetter,
            Category::Consistency => Archetype::ConsistentRock,
            Category::Versatility => Archetype::Flexible,
        }
    }
}

/// Label of the highest-scoring category.
///
/// Ties at the maximum go to the earliest category in
/// [`ARCHETYPE_PRIORITY`]. An empty score map is `Unknown`.
pub fn classify(scores: &CategoryScores) -> Archetype {
    let Some(max) = scores.iter().map(|(_, score)| score).reduce(f64::max) else {
        return Archetype::Unknown;
    };

    let tied: Vec<Category> = scores
        .iter()
        .filter(|(_, score)| *score == max)
        .map(|(category, _)| category)
        .collect();

    ARCHETYPE_PRIORITY
        .iter()
        .find(|category| tied.contains(category))
        .map(|category| Archetype::for_category(*category))
        .unwrap_or_default()
}
