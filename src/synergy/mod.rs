// Public API - what other modules can use
pub use archetype::{classify, Archetype, ARCHETYPE_PRIORITY};
pub use comparator::{check_complementary, compare, compare_scores, cosine_similarity};
pub use models::{
    ComparisonReport, IncompleteComparison, PlaystyleSynergy, ScoreEntry, ScorePair,
    SynergyReport, SynergyVerdict,
};

// Internal modules
mod archetype;
mod comparator;
pub mod models;
