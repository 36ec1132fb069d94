use std::collections::BTreeMap;

use tracing::{debug, instrument};

use super::{
    archetype::{classify, ARCHETYPE_PRIORITY},
    models::{
        ComparisonReport, IncompleteComparison, PlaystyleSynergy, ScorePair, SynergyReport,
        SynergyVerdict,
    },
    Archetype,
};
use crate::stats::{round_to_tenth, CategoryScores, PlayerAnalysis};

/// Unordered archetype pairs that play well together
pub const COMPLEMENTARY_PAIRS: [(Archetype, Archetype); 6] = [
    (Archetype::AggressorSlayer, Archetype::SupportTeamPlayer),
    (Archetype::AggressorSlayer, Archetype::VisionSetter),
    (Archetype::CarryFarmer, Archetype::SupportTeamPlayer),
    (Archetype::CarryFarmer, Archetype::VisionSetter),
    (Archetype::AggressorSlayer, Archetype::ConsistentRock),
    (Archetype::CarryFarmer, Archetype::Flexible),
];

const COMPARISON_FAILED: &str = "Cannot compare players. One or both player analyses failed.";

/// Compares two analysed players.
///
/// When either side carries an error the result only reports each side's
/// status; no scores are paired and no similarity is computed.
#[instrument(skip_all)]
pub fn compare(player1: &PlayerAnalysis, player2: &PlayerAnalysis) -> ComparisonReport {
    let (Some(scores1), Some(scores2)) = (player1.scores(), player2.scores()) else {
        debug!(
            player1_error = ?player1.error(),
            player2_error = ?player2.error(),
            "Skipping comparison of failed analysis"
        );
        return ComparisonReport::Incomplete(IncompleteComparison {
            error: COMPARISON_FAILED.to_string(),
            player1_status: player1.error().unwrap_or("OK").to_string(),
            player2_status: player2.error().unwrap_or("OK").to_string(),
        });
    };

    let name1 = player1.game_name().unwrap_or("Player 1");
    let name2 = player2.game_name().unwrap_or("Player 2");

    ComparisonReport::Complete(Box::new(compare_scores(name1, scores1, name2, scores2)))
}

pub fn compare_scores(
    name1: &str,
    scores1: &CategoryScores,
    name2: &str,
    scores2: &CategoryScores,
) -> SynergyReport {
    let mut score_comparison = BTreeMap::new();
    for category in scores1.categories().chain(scores2.categories()) {
        score_comparison.entry(category).or_insert_with(|| ScorePair {
            player1: scores1.get(category).into(),
            player2: scores2.get(category).into(),
        });
    }

    let archetype1 = classify(scores1);
    let archetype2 = classify(scores2);
    let verdict = check_complementary(archetype1, archetype2);

    SynergyReport {
        player1: name1.to_string(),
        player2: name2.to_string(),
        score_comparison,
        playstyle_synergy: PlaystyleSynergy {
            player1_archetype: archetype1,
            player2_archetype: archetype2,
            is_complementary: verdict.is_complementary,
            message: verdict.message,
        },
        playstyle_similarity_percent: cosine_similarity(scores1, scores2),
    }
}

pub fn is_complementary_pair(a: Archetype, b: Archetype) -> bool {
    COMPLEMENTARY_PAIRS
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

pub fn check_complementary(archetype1: Archetype, archetype2: Archetype) -> SynergyVerdict {
    if archetype1 == Archetype::Unknown || archetype2 == Archetype::Unknown {
        return SynergyVerdict {
            is_complementary: false,
            message: "Could not determine synergy due to incomplete player data.".to_string(),
        };
    }

    if archetype1 == archetype2 {
        return SynergyVerdict {
            is_complementary: false,
            message: format!(
                "Similar Styles: You are both {archetype1}s. You'll understand each other's goals, \
                 but might compete for the same resources or roles."
            ),
        };
    }

    if is_complementary_pair(archetype1, archetype2) {
        SynergyVerdict {
            is_complementary: true,
            message: format!(
                "Good Synergy: A {archetype1} and a {archetype2} complement each other well. \
                 One can focus on damage/farming while the other enables the team."
            ),
        }
    } else {
        SynergyVerdict {
            is_complementary: false,
            message: format!(
                "Neutral Synergy: A {archetype1} and {archetype2} don't have a strong natural \
                 synergy, but any two good players can find a way to win!"
            ),
        }
    }
}

/// Cosine similarity of the two score vectors as a percentage with one
/// decimal. Missing categories count as zero; a zero vector gives 0.
pub fn cosine_similarity(scores1: &CategoryScores, scores2: &CategoryScores) -> f64 {
    let vec1 = score_vector(scores1);
    let vec2 = score_vector(scores2);

    let norm1 = vec1.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm2 = vec2.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm1 == 0.0 || norm2 == 0.0 {
        return 0.0;
    }

    let dot: f64 = vec1.iter().zip(vec2.iter()).map(|(a, b)| a * b).sum();
    round_to_tenth(dot / (norm1 * norm2) * 100.0)
}

fn score_vector(scores: &CategoryScores) -> [f64; 6] {
    ARCHETYPE_PRIORITY.map(|category| scores.get(category).unwrap_or(0.0))
}
