use std::collections::HashMap;

use super::models::{SummaryDetails, Teammate};
use crate::riot::{types::ParticipantDto, MatchDto};
use crate::stats::round_to_tenth;

/// How many teammates the summary keeps
pub const TOP_TEAMMATES: usize = 3;

const SECONDS_PER_HOUR: f64 = 3600.0;

impl SummaryDetails {
    /// Folds the player's line from one match into the season totals.
    pub fn record(&mut self, game_duration: u64, line: &ParticipantDto) {
        let record = &line.record;

        self.total_game += 1;
        self.total_game_time += game_duration;

        self.kda.kill += record.kills as u64;
        self.kda.death += record.deaths as u64;
        self.kda.assist += record.assists as u64;
        *self
            .champions
            .entry(record.champion_name.clone())
            .or_insert(0) += 1;
        if record.win {
            self.winloss.win += 1;
        } else {
            self.winloss.loss += 1;
        }

        self.minion_killed += record.total_minions_killed as u64;
        self.jungle_killed += record.neutral_minions_killed as u64;
        self.total_gold += record.gold_earned;
        self.vision_score += record.vision_score as u64;
        self.control_wards_placed += line.control_wards_placed as u64;
        self.emotes_used += line.emotes_used as u64;

        self.pings.assist_me_pings += line.assist_me_pings as u64;
        self.pings.retreat_pings += line.retreat_pings as u64;
        self.pings.enemy_missing_pings += line.enemy_missing_pings as u64;
        self.pings.all_in_pings += line.all_in_pings as u64;

        self.legendary_monster_killed.baron_kills += line.baron_kills as u64;
        self.legendary_monster_killed.dragon_kills += line.dragon_kills as u64;
        self.legendary_monster_killed.rift_herald_takedowns += line.rift_herald_takedowns as u64;

        self.multikills.triple_kills += line.triple_kills as u64;
        self.multikills.quadra_kills += line.quadra_kills as u64;
        self.multikills.penta_kills += line.penta_kills as u64;

        self.damage_dealt.magic += line.magic_damage_dealt;
        self.damage_dealt.physical += line.physical_damage_dealt;
        self.damage_dealt.true_damage += line.true_damage_dealt;
        self.damage_taken.magic += line.magic_damage_taken;
        self.damage_taken.physical += line.physical_damage_taken;
        self.damage_taken.true_damage += line.true_damage_taken;
    }
}

/// Games shared with each teammate, in first-seen order
#[derive(Default)]
struct TeammateTally {
    seen: Vec<Teammate>,
    index: HashMap<String, usize>,
}

impl TeammateTally {
    fn record(&mut self, puuid: &str, line: &ParticipantDto) {
        if let Some(&slot) = self.index.get(puuid) {
            self.seen[slot].games_together += 1;
            return;
        }

        self.index.insert(puuid.to_string(), self.seen.len());
        self.seen.push(Teammate {
            puuid: puuid.to_string(),
            name: line.riot_id_game_name.clone(),
            tag_line: line.riot_id_tagline.clone(),
            games_together: 1,
        });
    }

    /// Most games first; equal counts keep first-seen order
    fn top(mut self, n: usize) -> Vec<Teammate> {
        self.seen
            .sort_by(|a, b| b.games_together.cmp(&a.games_together));
        self.seen.truncate(n);
        self.seen
    }
}

/// Season totals over every match `puuid` took part in. Matches the player
/// is missing from are skipped.
pub fn summarize(puuid: &str, matches: &[MatchDto]) -> SummaryDetails {
    let mut details = SummaryDetails::default();
    let mut teammates = TeammateTally::default();

    for m in matches {
        let Some(line) = m.participant_line(puuid) else {
            continue;
        };
        details.record(m.info.game_duration, line);
        for (mate, mate_line) in m.teammates(puuid) {
            teammates.record(mate, mate_line);
        }
    }

    details.hours_played = round_to_tenth(details.total_game_time as f64 / SECONDS_PER_HOUR);
    details.participants = teammates.top(TOP_TEAMMATES);
    details
}
