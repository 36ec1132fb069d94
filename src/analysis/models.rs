use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::riot::RiotId;

const ANALYSIS_FEATURE: &str = "SAW";
const COMPARISON_FEATURE: &str = "COMP";
const SUMMARY_FEATURE: &str = "YES";

/// Primary key of a stored result: who it is about and which feature
/// produced it, e.g. (`Faker#KR1#kr`, `2025#SAW`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreKey {
    pub player: String,
    pub feature: String,
}

impl StoreKey {
    pub fn analysis(riot_id: &RiotId, season: &str) -> Self {
        Self {
            player: riot_id.store_key(),
            feature: format!("{season}#{ANALYSIS_FEATURE}"),
        }
    }

    /// Year-end summary for one player
    pub fn summary(riot_id: &RiotId, season: &str) -> Self {
        Self {
            player: riot_id.store_key(),
            feature: format!("{season}#{SUMMARY_FEATURE}"),
        }
    }

    /// Same key for (a, b) and (b, a)
    pub fn comparison(first: &RiotId, second: &RiotId, season: &str) -> Self {
        let mut keys = [first.store_key(), second.store_key()];
        keys.sort();
        Self {
            player: format!("{}##{}", keys[0], keys[1]),
            feature: format!("{season}#{COMPARISON_FEATURE}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredResult {
    pub result: serde_json::Value,
    pub stored_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_key_uses_season_feature() {
        let key = StoreKey::analysis(&RiotId::new("Faker", "KR1", "kr"), "2025");
        assert_eq!(key.player, "Faker#KR1#kr");
        assert_eq!(key.feature, "2025#SAW");
    }

    #[test]
    fn summary_key_sits_next_to_analysis() {
        let id = RiotId::new("Faker", "KR1", "kr");
        let summary = StoreKey::summary(&id, "2025");

        assert_eq!(summary.player, "Faker#KR1#kr");
        assert_eq!(summary.feature, "2025#YES");
        assert_ne!(summary, StoreKey::analysis(&id, "2025"));
    }

    #[test]
    fn comparison_key_is_order_independent() {
        let a = RiotId::new("Zed", "EUW", "euw");
        let b = RiotId::new("Ahri", "NA1", "na");

        let forward = StoreKey::comparison(&a, &b, "2025");
        let backward = StoreKey::comparison(&b, &a, "2025");

        assert_eq!(forward, backward);
        assert_eq!(forward.player, "Ahri#NA1#na##Zed#EUW#euw");
        assert_eq!(forward.feature, "2025#COMP");
    }
}
