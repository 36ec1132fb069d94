use playstyle::{MasteryRecord, MatchParticipantRecord};

// ============================================================================
// Record Builders
// ============================================================================

pub struct RecordBuilder {
    record: MatchParticipantRecord,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            record: MatchParticipantRecord::default(),
        }
    }

    /// 3/2/4, 15k damage, 12k gold, 120 creeps, 30 vision
    pub fn steady() -> Self {
        Self::new()
            .kda(3, 2, 4)
            .damage(15_000)
            .gold(12_000)
            .creeps(100, 20)
            .vision(30)
    }

    pub fn kda(mut self, kills: u32, deaths: u32, assists: u32) -> Self {
        self.record.kills = kills;
        self.record.deaths = deaths;
        self.record.assists = assists;
        self
    }

    pub fn damage(mut self, damage: u64) -> Self {
        self.record.total_damage_dealt_to_champions = damage;
        self
    }

    pub fn gold(mut self, gold: u64) -> Self {
        self.record.gold_earned = gold;
        self
    }

    pub fn creeps(mut self, minions: u32, neutral: u32) -> Self {
        self.record.total_minions_killed = minions;
        self.record.neutral_minions_killed = neutral;
        self
    }

    pub fn vision(mut self, vision: u32) -> Self {
        self.record.vision_score = vision;
        self
    }

    pub fn win(mut self, win: bool) -> Self {
        self.record.win = win;
        self
    }

    pub fn champion(mut self, name: &str) -> Self {
        self.record.champion_name = name.to_string();
        self
    }

    pub fn build(self) -> MatchParticipantRecord {
        self.record
    }
}

// ============================================================================
// Scenarios
// ============================================================================

/// Twenty identical 3/2/4 games, alternating wins, over four champions
pub fn twenty_match_season() -> Vec<MatchParticipantRecord> {
    let champions = ["Ahri", "Zed", "Lux", "Jinx"];
    (0..20)
        .map(|i| {
            RecordBuilder::steady()
                .win(i % 2 == 0)
                .champion(champions[i % champions.len()])
                .build()
        })
        .collect()
}

pub fn masteries(points: &[u64]) -> Vec<MasteryRecord> {
    points
        .iter()
        .enumerate()
        .map(|(i, &champion_points)| MasteryRecord {
            champion_id: i as i64 + 1,
            champion_level: 7,
            champion_points,
        })
        .collect()
}

/// A varied set of games with uneven impact, used for ordering checks
pub fn mixed_games() -> Vec<MatchParticipantRecord> {
    vec![
        RecordBuilder::new().kda(12, 1, 3).damage(41_000).gold(15_500).creeps(210, 14).vision(18).win(true).champion("Zed").build(),
        RecordBuilder::new().kda(0, 9, 2).damage(6_400).gold(7_100).creeps(90, 0).vision(11).champion("Yasuo").build(),
        RecordBuilder::new().kda(4, 4, 17).damage(18_900).gold(10_200).creeps(35, 2).vision(64).win(true).champion("Thresh").build(),
        RecordBuilder::new().kda(7, 3, 7).damage(27_300).gold(13_000).creeps(180, 31).vision(22).win(true).champion("Zed").build(),
        RecordBuilder::new().kda(2, 6, 5).damage(12_050).gold(8_800).creeps(140, 6).vision(15).champion("Ahri").build(),
        RecordBuilder::new().kda(9, 0, 11).damage(33_700).gold(14_900).creeps(195, 40).vision(27).win(true).champion("Kindred").build(),
    ]
}

/// Deterministic reorderings of `items`: reversed, rotations and a few
/// fixed interleavings.
pub fn permutations_of<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut orders = Vec::new();

    let mut reversed = items.to_vec();
    reversed.reverse();
    orders.push(reversed);

    for shift in 1..items.len() {
        let mut rotated = items.to_vec();
        rotated.rotate_left(shift);
        orders.push(rotated);
    }

    let evens_then_odds: Vec<T> = items
        .iter()
        .step_by(2)
        .chain(items.iter().skip(1).step_by(2))
        .cloned()
        .collect();
    orders.push(evens_then_odds);

    // Fisher-Yates driven by a fixed linear congruential sequence
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    for _ in 0..3 {
        let mut shuffled = items.to_vec();
        for i in (1..shuffled.len()).rev() {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let j = (state >> 33) as usize % (i + 1);
            shuffled.swap(i, j);
        }
        orders.push(shuffled);
    }

    orders
}
