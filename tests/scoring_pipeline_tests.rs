mod utils;

use playstyle::{
    classify, compare, cosine_similarity,
    stats::{derive, fold, PlayerInfo, PlayerProfile},
    Archetype, Category, CategoryScores, ComparisonReport, PlayerAnalysis, StatsError,
    StatsService,
};
use strum::IntoEnumIterator;
use utils::builders::{masteries, mixed_games, twenty_match_season};
use utils::{permutations_of, RecordBuilder};

fn profile(name: &str, scores: CategoryScores) -> PlayerAnalysis {
    PlayerAnalysis::Profile(Box::new(PlayerProfile {
        player: PlayerInfo {
            game_name: name.to_string(),
            tag_line: "NA1".to_string(),
            region: "na".to_string(),
            ..PlayerInfo::default()
        },
        metrics: Default::default(),
        derived: Default::default(),
        archetype: classify(&scores),
        scores,
        mastery: Vec::new(),
    }))
}

#[test]
fn twenty_match_season_scores_match_reference_values() {
    let service = StatsService::default();

    let scored = service
        .score_player(&twenty_match_season(), &masteries(&[40_000, 40_000, 40_000]))
        .expect("season with matches should score");

    assert_eq!(scored.raw.total_matches, 20);
    assert_eq!(scored.raw.kills, 60);
    assert_eq!(scored.raw.deaths, 40);
    assert_eq!(scored.raw.assists, 80);
    assert_eq!(scored.raw.creep_score, 2_400);
    assert_eq!(scored.raw.wins, 10);
    assert_eq!(scored.derived.kda, 3.5);
    assert_eq!(scored.derived.win_rate, 50.0);
    assert_eq!(scored.derived.unique_champions, 4);
    assert_eq!(scored.derived.avg_mastery, 40_000.0);

    let scores = &scored.scores;
    assert_eq!(scores.get(Category::Farming), Some(86.0));
    assert_eq!(scores.get(Category::Vision), Some(75.0));
    assert_eq!(scores.get(Category::Aggression), Some(95.8));
    assert_eq!(scores.get(Category::Teamplay), Some(95.6));
    assert_eq!(scores.get(Category::Consistency), Some(100.0));
    assert_eq!(scores.get(Category::Versatility), Some(80.0));

    assert_eq!(classify(scores), Archetype::AggressorSlayer);
}

#[test]
fn scores_are_identical_under_any_record_order() {
    let service = StatsService::default();
    let games = mixed_games();
    let mastery = masteries(&[120_000, 35_000, 8_000, 61_000, 2_500, 90_000]);
    let baseline = service.score_player(&games, &mastery).unwrap();

    for order in permutations_of(&games) {
        let scored = service.score_player(&order, &mastery).unwrap();
        assert_eq!(scored.raw.champion_variety, baseline.raw.champion_variety);
        for category in Category::iter() {
            let expected = baseline.scores.get(category).unwrap();
            let actual = scored.scores.get(category).unwrap();
            assert_eq!(
                actual.to_bits(),
                expected.to_bits(),
                "{category} changed under reordering"
            );
        }
    }
}

#[test]
fn mastery_order_does_not_change_versatility() {
    let service = StatsService::default();
    let games = mixed_games();
    let points = [5_000, 250_000, 70_000, 70_000, 1_000, 64_000, 300];

    let forward = service.score_player(&games, &masteries(&points)).unwrap();
    let mut reversed_points = points;
    reversed_points.reverse();
    let backward = service
        .score_player(&games, &masteries(&reversed_points))
        .unwrap();

    assert_eq!(
        forward.scores.get(Category::Versatility),
        backward.scores.get(Category::Versatility)
    );
}

#[test]
fn every_score_stays_within_bounds() {
    let service = StatsService::default();
    let extremes = vec![
        vec![RecordBuilder::new().build()],
        vec![RecordBuilder::new()
            .kda(40, 0, 60)
            .damage(250_000)
            .gold(60_000)
            .creeps(900, 300)
            .vision(400)
            .win(true)
            .build()],
        vec![
            RecordBuilder::new().kda(0, 25, 0).build(),
            RecordBuilder::new().kda(30, 0, 30).win(true).build(),
            RecordBuilder::new().kda(0, 18, 1).build(),
        ],
        mixed_games(),
        twenty_match_season(),
    ];
    let mastery_sets = [
        Vec::new(),
        masteries(&[10_000_000, 9_000_000]),
        masteries(&[0, 0, 0, 0, 0]),
    ];

    for games in &extremes {
        for mastery in &mastery_sets {
            let scored = service.score_player(games, mastery).unwrap();
            assert!(scored.scores.is_complete());
            for (category, score) in scored.scores.iter() {
                assert!(
                    (0.0..=100.0).contains(&score),
                    "{category} = {score} out of range"
                );
                assert_eq!(score, (score * 10.0).round() / 10.0, "{category} not rounded");
            }
        }
    }
}

#[test]
fn empty_history_is_no_data() {
    let service = StatsService::default();

    let result = service.score_player(&[], &masteries(&[50_000]));
    assert_eq!(result.unwrap_err(), StatsError::no_matches());

    let raw = fold(&[]);
    assert_eq!(raw.total_matches, 0);
    assert!(matches!(derive(&raw, &[]), Err(StatsError::NoData(_))));
}

#[test]
fn missing_mastery_only_costs_the_mastery_half() {
    let service = StatsService::default();

    let scored = service.score_player(&twenty_match_season(), &[]).unwrap();

    assert_eq!(scored.derived.avg_mastery, 0.0);
    assert_eq!(scored.scores.get(Category::Versatility), Some(40.0));
}

#[test]
fn half_tenth_scores_round_to_even() {
    let service = StatsService::default();
    let games = vec![
        RecordBuilder::steady().vision(2).build(),
        RecordBuilder::steady().vision(3).build(),
    ];

    let scored = service.score_player(&games, &[]).unwrap();

    // 2.5 average vision is exactly 6.25 before rounding
    assert_eq!(scored.derived.avg_vision_score, 2.5);
    assert_eq!(scored.scores.get(Category::Vision), Some(6.2));
}

#[test]
fn farming_and_consistency_tie_resolves_to_farming() {
    let scores: CategoryScores = [
        (Category::Farming, 70.0),
        (Category::Consistency, 70.0),
        (Category::Vision, 20.0),
    ]
    .into_iter()
    .collect();

    assert_eq!(classify(&scores), Archetype::CarryFarmer);
    assert_eq!(classify(&CategoryScores::new()), Archetype::Unknown);
}

#[test]
fn similarity_is_symmetric_across_real_profiles() {
    let service = StatsService::default();
    let steady = service
        .score_player(&twenty_match_season(), &masteries(&[40_000]))
        .unwrap()
        .scores;
    let mixed = service
        .score_player(&mixed_games(), &masteries(&[80_000, 12_000]))
        .unwrap()
        .scores;

    let forward = cosine_similarity(&steady, &mixed);
    let backward = cosine_similarity(&mixed, &steady);

    assert_eq!(forward.to_bits(), backward.to_bits());
    assert!(forward > 0.0 && forward <= 100.0);
    assert_eq!(cosine_similarity(&steady, &steady), 100.0);
}

#[test]
fn comparison_of_scored_players_pairs_every_category() {
    let service = StatsService::default();
    let steady = service
        .score_player(&twenty_match_season(), &masteries(&[40_000]))
        .unwrap()
        .scores;
    let mixed = service
        .score_player(&mixed_games(), &masteries(&[80_000]))
        .unwrap()
        .scores;

    let report = compare(&profile("Steady", steady), &profile("Mixed", mixed));

    let ComparisonReport::Complete(report) = report else {
        panic!("both profiles scored, comparison should be complete");
    };
    assert_eq!(report.player1, "Steady");
    assert_eq!(report.player2, "Mixed");
    assert_eq!(report.score_comparison.len(), 6);
    assert_eq!(
        report.playstyle_synergy.player1_archetype,
        Archetype::AggressorSlayer
    );
}

#[test]
fn comparison_with_failed_player_reports_statuses() {
    let failed = PlayerAnalysis::failed("No matches found");
    let ok = profile(
        "Steady",
        [(Category::Farming, 50.0)].into_iter().collect(),
    );

    let ComparisonReport::Incomplete(report) = compare(&failed, &ok) else {
        panic!("a failed side makes the comparison incomplete");
    };
    assert_eq!(report.player1_status, "No matches found");
    assert_eq!(report.player2_status, "OK");

    let json = serde_json::to_value(ComparisonReport::Incomplete(report)).unwrap();
    assert!(json.get("score_comparison").is_none());
}
