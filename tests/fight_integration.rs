//! Fight resolution integration tests

use fight_night::core::types::Corner;
use fight_night::fight::*;
use fight_night::roster::Fighter;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_seeded_fight_replays_exactly() {
    let striker = Fighter::test_striker();
    let durable = Fighter::test_durable();

    let first = resolve_fight(&striker, &durable, false, &mut ChaCha8Rng::seed_from_u64(2024));
    let second = resolve_fight(&striker, &durable, false, &mut ChaCha8Rng::seed_from_u64(2024));

    assert_eq!(first.winner, second.winner);
    assert_eq!(first.method, second.method);
    assert_eq!(first.round, second.round);
    assert_eq!(first.time, second.time);
    assert_eq!(first.rounds, second.rounds);
}

#[test]
fn test_striker_lands_knockouts() {
    let striker = Fighter::test_striker();
    let durable = Fighter::test_durable();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let knockouts = (0..300)
        .map(|_| resolve_fight(&striker, &durable, false, &mut rng))
        .filter(|r| r.winner == striker.id && r.method.category() == MethodCategory::Knockout)
        .count();
    assert!(knockouts > 0);
}

#[test]
fn test_no_round_scored_even() {
    let a = Fighter::test_lightweight("Even Match", 60);
    let b = Fighter::test_lightweight("Other Match", 60);
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    for _ in 0..300 {
        let result = resolve_fight(&a, &b, true, &mut rng);
        for round in &result.rounds {
            match (round.score, round.finish) {
                (Some(score), None) => assert_ne!(score.first, score.second),
                (None, Some(finish)) => assert_eq!(finish.round, round.round),
                other => panic!("round {} has {:?}", round.round, other),
            }
        }
    }
}

#[test]
fn test_title_fights_can_reach_round_five() {
    let a = Fighter::test_lightweight("Long Fight", 70);
    let b = Fighter::test_lightweight("Hard Night", 70);
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let results: Vec<FightResult> =
        (0..100).map(|_| resolve_fight(&a, &b, true, &mut rng)).collect();
    assert!(results.iter().all(|r| r.round <= 5));
    assert!(results.iter().any(|r| r.round == 5 && !r.is_finish()));
}

#[test]
fn test_decisions_only_at_final_bell() {
    let a = Fighter::test_lightweight("Decision One", 55);
    let b = Fighter::test_lightweight("Decision Two", 55);
    let mut rng = ChaCha8Rng::seed_from_u64(15);

    for _ in 0..200 {
        let result = resolve_fight(&a, &b, false, &mut rng);
        if let FinishMethod::Decision(_) = result.method {
            assert_eq!(result.round, 3);
            assert_eq!(result.time.to_string(), "5:00");
            assert_eq!(result.rounds.len(), 3);
        }
    }
}

#[test]
fn test_winning_corner_matches_winner() {
    let a = Fighter::test_striker();
    let b = Fighter::test_durable();
    let mut rng = ChaCha8Rng::seed_from_u64(21);

    for _ in 0..100 {
        let result = resolve_fight(&a, &b, false, &mut rng);
        let expected = match result.winning_corner {
            Corner::First => a.id,
            Corner::Second => b.id,
        };
        assert_eq!(result.winner, expected);
    }
}
