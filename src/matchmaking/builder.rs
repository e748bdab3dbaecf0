//! Card building
//!
//! Books title fights first, then a ranked main card, then prelims from the
//! lower end of each division. A fighter is booked at most once per card and
//! champions only ever appear in title fights.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{BTreeMap, HashSet};

use crate::core::types::{FightId, FighterId};
use crate::matchmaking::card::{CardPosition, Fight, FightCard};
use crate::matchmaking::constants::*;
use crate::roster::division::DivisionKey;
use crate::roster::fighter::Fighter;
use crate::roster::store::Roster;

/// Fighters already booked on the card being built
#[derive(Debug, Default)]
pub struct UsedFighters(HashSet<FighterId>);

impl UsedFighters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: FighterId) -> bool {
        self.0.contains(&id)
    }

    pub fn book(&mut self, a: FighterId, b: FighterId) {
        self.0.insert(a);
        self.0.insert(b);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A division whose belt can be contested on this card
#[derive(Debug, Clone, Copy)]
struct TitleBout {
    division: DivisionKey,
    first: FighterId,
    second: FighterId,
    vacant: bool,
}

type Pools<'a> = BTreeMap<DivisionKey, Vec<&'a Fighter>>;

fn title_eligible(pools: &Pools<'_>, used: &UsedFighters) -> Vec<TitleBout> {
    let mut bouts = Vec::new();
    for (&division, pool) in pools {
        let mut contenders = pool.iter().filter(|f| !f.is_champion && !used.contains(f.id));
        match pool.iter().find(|f| f.is_champion) {
            Some(champion) if !used.contains(champion.id) => {
                if let Some(challenger) = contenders.next() {
                    bouts.push(TitleBout {
                        division,
                        first: champion.id,
                        second: challenger.id,
                        vacant: false,
                    });
                }
            }
            Some(_) => {}
            None => {
                if let (Some(a), Some(b)) = (contenders.next(), contenders.next()) {
                    bouts.push(TitleBout { division, first: a.id, second: b.id, vacant: true });
                }
            }
        }
    }
    bouts
}

/// Unused non-champions of a division, best ranked first
fn available<'a>(pool: &[&'a Fighter], used: &UsedFighters) -> Vec<&'a Fighter> {
    pool.iter()
        .copied()
        .filter(|f| !f.is_champion && !used.contains(f.id))
        .collect()
}

/// Highest available contender against the nearest-ranked opponent
fn ranked_matchup<'a>(
    pool: &[&'a Fighter],
    used: &UsedFighters,
) -> Option<(&'a Fighter, &'a Fighter)> {
    let candidates = available(pool, used);
    let (&headliner, rest) = candidates.split_first()?;
    let opponent = rest
        .iter()
        .find(|f| f.ranking.abs_diff(headliner.ranking) <= RANK_WINDOW)
        .or_else(|| rest.first())
        .copied()?;
    Some((headliner, opponent))
}

/// Two random fighters from the bottom of the division
fn prelim_matchup<'a, R: Rng + ?Sized>(
    pool: &[&'a Fighter],
    used: &UsedFighters,
    rng: &mut R,
) -> Option<(&'a Fighter, &'a Fighter)> {
    let mut lower: Vec<&Fighter> = available(pool, used)
        .into_iter()
        .filter(|f| f.ranking > PRELIM_MIN_RANKING)
        .collect();
    if lower.len() < 2 {
        return None;
    }
    let first = lower.remove(rng.gen_range(0..lower.len()));
    let second = lower[rng.gen_range(0..lower.len())];
    Some((first, second))
}

/// Title fights wanted for a uniform roll in [0, 1)
fn title_fights_for_roll(roll: f64) -> usize {
    if roll <= TITLE_ROLL_NONE {
        0
    } else if roll <= TITLE_ROLL_ONE {
        1
    } else {
        MAX_TITLE_FIGHTS
    }
}

fn title_fight_count<R: Rng + ?Sized>(rng: &mut R) -> usize {
    title_fights_for_roll(rng.gen())
}

fn scheduled<R: Rng + ?Sized>(
    division: DivisionKey,
    first: FighterId,
    second: FighterId,
    position: CardPosition,
    order: u32,
    rng: &mut R,
) -> Fight {
    Fight {
        id: FightId::from_rng(rng),
        event_id: None,
        first,
        second,
        position,
        order,
        is_title: false,
        is_vacant: false,
        division,
        result: None,
    }
}

/// Build the card for the given event number.
///
/// Returns an empty card with no main event when no division has two active
/// fighters.
pub fn build_card<R: Rng + ?Sized>(
    roster: &Roster,
    event_number: u32,
    rng: &mut R,
) -> FightCard {
    let pools = roster.divisions();
    let viable: Vec<DivisionKey> = pools
        .iter()
        .filter(|(_, pool)| pool.len() >= 2)
        .map(|(&key, _)| key)
        .collect();
    if viable.is_empty() {
        tracing::debug!("No division has two active fighters, card is empty");
        return FightCard::empty();
    }

    let mut used = UsedFighters::new();
    let mut card = FightCard::empty();

    // Title fights
    let mut eligible = if event_number >= TITLE_FIGHTS_FROM_EVENT {
        title_eligible(&pools, &used)
    } else {
        Vec::new()
    };
    let wanted = title_fight_count(rng);
    eligible.shuffle(rng);
    for (i, bout) in eligible.into_iter().take(wanted).enumerate() {
        used.book(bout.first, bout.second);
        let order = if i == 0 { MAIN_EVENT_ORDER } else { TITLE_FIGHT_ORDER_BASE + i as u32 };
        let mut fight =
            scheduled(bout.division, bout.first, bout.second, CardPosition::Main, order, rng);
        fight.is_title = true;
        fight.is_vacant = bout.vacant;
        if i == 0 {
            card.main_event = Some(fight.id);
        }
        card.fights.push(fight);
    }

    // Main card
    let title_count = card.fights.len() as u32;
    let main_target =
        (MAIN_CARD_BASE + rng.gen_range(0..CARD_SIZE_SPREAD)).saturating_sub(title_count);
    for slot in 0..main_target {
        let Some(&division) = viable.choose(rng) else { break };
        let Some((a, b)) = ranked_matchup(&pools[&division], &used) else {
            tracing::debug!("Main card slot {} skipped, {} exhausted", slot, division);
            continue;
        };
        used.book(a.id, b.id);
        let headline = card.main_event.is_none();
        let order = if headline { MAIN_EVENT_ORDER } else { main_target - slot };
        let fight = scheduled(division, a.id, b.id, CardPosition::Main, order, rng);
        if headline {
            card.main_event = Some(fight.id);
        }
        card.fights.push(fight);
    }

    // Prelims
    let prelim_target = PRELIM_BASE + rng.gen_range(0..CARD_SIZE_SPREAD);
    for slot in 0..prelim_target {
        let Some(&division) = viable.choose(rng) else { break };
        let Some((a, b)) = prelim_matchup(&pools[&division], &used, rng) else {
            tracing::debug!(
                "Prelim slot {} skipped, {} has no lower-ranked pair",
                slot,
                division
            );
            continue;
        };
        used.book(a.id, b.id);
        let order = prelim_target - slot;
        let fight = scheduled(division, a.id, b.id, CardPosition::Prelim, order, rng);
        card.fights.push(fight);
    }

    tracing::debug!(
        "Built card for event {}: {} fights, {} title",
        event_number,
        card.len(),
        card.title_fights().count()
    );
    card
}
