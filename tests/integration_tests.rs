// Integration tests for Duo Algo

use duo_algo::core::MatchEvaluator;
use duo_algo::models::{
    AgeGroup, CompetitiveStanding, Criteria, Player, Position, QueueType, Region, Tier,
    VoicePreference,
};

fn create_test_player(
    id: &str,
    region: Region,
    tier: Tier,
    division: Option<u8>,
    languages: &[&str],
) -> Player {
    Player {
        player_id: id.to_string(),
        name: format!("Player {}", id),
        region,
        voice_chat: vec![VoicePreference::Yes, VoicePreference::Sometimes],
        languages: languages.iter().map(|l| l.to_string()).collect(),
        age_group: AgeGroup::YoungAdult,
        positions: vec![Position::Jungle, Position::Support],
        standing: CompetitiveStanding {
            queue: QueueType::RankedSolo5x5,
            tier,
            division,
        },
        criteria: Criteria {
            positions: vec![
                Position::Top,
                Position::Jungle,
                Position::Middle,
                Position::Bottom,
                Position::Support,
            ],
            voice_chat: vec![VoicePreference::Yes],
            age_groups: vec![AgeGroup::Teen, AgeGroup::YoungAdult, AgeGroup::Adult],
            ignore_language: false,
        },
        description: None,
    }
}

#[test]
fn test_integration_end_to_end_filtering() {
    let evaluator = MatchEvaluator::new();
    let player = create_test_player("me", Region::Euw, Tier::Gold, Some(3), &["en"]);

    // Create diverse candidates
    let candidates = vec![
        create_test_player("1", Region::Euw, Tier::Gold, Some(1), &["en"]), // Same tier
        create_test_player("2", Region::Euw, Tier::Silver, Some(4), &["en"]), // One loose tier down
        create_test_player("3", Region::Euw, Tier::Platinum, Some(2), &["en", "fr"]), // One loose tier up
        create_test_player("4", Region::Euw, Tier::Diamond, Some(5), &["en"]), // Too far up
        create_test_player("5", Region::Na, Tier::Gold, Some(3), &["en"]),  // Wrong region
        create_test_player("6", Region::Euw, Tier::Gold, Some(3), &["de"]), // No shared language
        create_test_player("me", Region::Euw, Tier::Gold, Some(3), &["en"]), // Self
    ];

    let compatible = evaluator.filter_candidates(&player, &candidates);
    let ids: Vec<&str> = compatible.iter().map(|c| c.player_id.as_str()).collect();

    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[test]
fn test_integration_verdicts_are_symmetric() {
    let evaluator = MatchEvaluator::new();

    let population = vec![
        create_test_player("a", Region::Euw, Tier::Unranked, None, &["en"]),
        create_test_player("b", Region::Euw, Tier::Bronze, Some(2), &["en"]),
        create_test_player("c", Region::Euw, Tier::Silver, Some(1), &["en", "de"]),
        create_test_player("d", Region::Euw, Tier::Gold, Some(4), &["de"]),
        create_test_player("e", Region::Euw, Tier::Platinum, Some(1), &["en"]),
        create_test_player("f", Region::Euw, Tier::Diamond, Some(1), &["en"]),
        create_test_player("g", Region::Euw, Tier::Diamond, None, &["en"]),
        create_test_player("h", Region::Euw, Tier::Master, None, &["en"]),
        create_test_player("i", Region::Kr, Tier::Gold, Some(4), &["ko", "en"]),
        create_test_player("j", Region::Euw, Tier::Challenger, None, &["en"]),
    ];

    for a in &population {
        for b in &population {
            assert_eq!(
                evaluator.is_match(a, b),
                evaluator.is_match(b, a),
                "asymmetric verdict for {} vs {}",
                a.player_id,
                b.player_id
            );
        }
    }
}

#[test]
fn test_integration_self_never_matches() {
    let evaluator = MatchEvaluator::new();

    for tier in [Tier::Unranked, Tier::Gold, Tier::Diamond, Tier::Challenger] {
        let player = create_test_player("solo", Region::Euw, tier, Some(1), &["en"]);
        assert!(!evaluator.is_match(&player, &player.clone()));
    }
}

#[test]
fn test_integration_language_override_pair() {
    let evaluator = MatchEvaluator::new();

    let mut a = create_test_player("a", Region::Euw, Tier::Gold, Some(2), &["fi"]);
    let mut b = create_test_player("b", Region::Euw, Tier::Gold, Some(2), &["pt"]);

    assert!(!evaluator.is_match(&a, &b));

    a.criteria.ignore_language = true;
    b.criteria.ignore_language = true;
    assert!(evaluator.is_match(&a, &b));
}

#[test]
fn test_integration_apex_ladder_boundaries() {
    let evaluator = MatchEvaluator::new();

    let master = create_test_player("m", Region::Euw, Tier::Master, None, &["en"]);
    let diamond_three = create_test_player("d3", Region::Euw, Tier::Diamond, Some(3), &["en"]);
    let diamond_four = create_test_player("d4", Region::Euw, Tier::Diamond, Some(4), &["en"]);
    let challenger = create_test_player("c", Region::Euw, Tier::Challenger, None, &["en"]);

    assert!(evaluator.is_match(&master, &diamond_three));
    assert!(!evaluator.is_match(&master, &diamond_four));
    assert!(evaluator.is_match(&master, &challenger));
    assert!(!evaluator.is_match(&challenger, &diamond_four));
}
