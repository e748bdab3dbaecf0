//! Card building integration tests

use std::collections::HashSet;

use fight_night::core::types::{FighterId, Gender};
use fight_night::matchmaking::constants::MAIN_EVENT_ORDER;
use fight_night::matchmaking::*;
use fight_night::rankings::rerank;
use fight_night::roster::{generate_roster, Fighter, Roster, Skills};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generated roster with a champion crowned in every other division
fn roster_with_champions(seed: u64) -> Roster {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut roster = generate_roster(8, &mut rng).unwrap();
    let top: Vec<FighterId> = roster
        .divisions()
        .values()
        .step_by(2)
        .filter_map(|pool| pool.first().map(|f| f.id))
        .collect();
    for id in top {
        roster.require_mut(id).unwrap().crown();
    }
    rerank(&mut roster).unwrap();
    roster
}

#[test]
fn test_two_fighter_roster_books_one_main_event() {
    for seed in 0..40 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut a =
            Fighter::new(FighterId::new(), "Alpha Fighter", Gender::Women, 57, Skills::default());
        a.ranking = 1;
        let mut b =
            Fighter::new(FighterId::new(), "Bravo Fighter", Gender::Women, 57, Skills::default());
        b.ranking = 2;
        let roster = Roster::new(vec![a, b]);

        let card = build_card(&roster, 5, &mut rng);
        assert_eq!(card.len(), 1);
        assert_eq!(card.fights[0].order, MAIN_EVENT_ORDER);
        assert_eq!(card.main_event, Some(card.fights[0].id));
    }
}

#[test]
fn test_no_fighter_booked_twice() {
    for seed in 0..30 {
        let roster = roster_with_champions(seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed + 1000);
        let card = build_card(&roster, 4, &mut rng);
        let mut seen = HashSet::new();
        for id in card.fighters() {
            assert!(seen.insert(id), "fighter booked twice on seed {}", seed);
        }
    }
}

#[test]
fn test_champions_only_in_title_fights() {
    for seed in 0..30 {
        let roster = roster_with_champions(seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed + 2000);
        let card = build_card(&roster, 6, &mut rng);
        for fight in &card.fights {
            let champ_involved = [fight.first, fight.second]
                .iter()
                .any(|&id| roster.require(id).unwrap().is_champion);
            if champ_involved {
                assert!(fight.is_title);
                assert!(!fight.is_vacant);
            }
        }
    }
}

#[test]
fn test_title_fights_start_at_event_three() {
    let mut saw_title = false;
    for seed in 0..30 {
        let roster = roster_with_champions(seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for event_number in 1..=2 {
            assert_eq!(build_card(&roster, event_number, &mut rng).title_fights().count(), 0);
        }
        saw_title |= build_card(&roster, 3, &mut rng).title_fights().count() > 0;
    }
    assert!(saw_title);
}

#[test]
fn test_title_fight_orders() {
    for seed in 0..30 {
        let roster = roster_with_champions(seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed + 3000);
        let card = build_card(&roster, 10, &mut rng);

        let title: Vec<&Fight> = card.title_fights().collect();
        assert!(title.len() <= 2);
        if let Some(first) = title.first() {
            assert_eq!(first.order, MAIN_EVENT_ORDER);
            assert_eq!(card.main_event, Some(first.id));
        }
        if let Some(second) = title.get(1) {
            assert_eq!(second.order, 101);
        }
        assert!(title.iter().all(|f| f.position == CardPosition::Main));
    }
}

#[test]
fn test_prelims_ranked_below_five() {
    for seed in 0..20 {
        let roster = roster_with_champions(seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed + 4000);
        let card = build_card(&roster, 2, &mut rng);
        for fight in card.fights.iter().filter(|f| f.position == CardPosition::Prelim) {
            assert!(roster.require(fight.first).unwrap().ranking > 5);
            assert!(roster.require(fight.second).unwrap().ranking > 5);
        }
    }
}

#[test]
fn test_fights_stay_within_division() {
    let roster = roster_with_champions(77);
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    let card = build_card(&roster, 5, &mut rng);
    for fight in &card.fights {
        assert_eq!(roster.require(fight.first).unwrap().division(), fight.division);
        assert_eq!(roster.require(fight.second).unwrap().division(), fight.division);
    }
}
