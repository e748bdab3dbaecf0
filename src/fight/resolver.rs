//! Fight resolution - runs rounds until a finish or the final bell

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::types::{Corner, FighterId};
use crate::fight::constants::*;
use crate::fight::method::{DecisionKind, FightClock, FinishMethod};
use crate::fight::round::{simulate_round, CornerStats, RoundContext, RoundStats};
use crate::roster::fighter::Fighter;

/// Fight-long totals for one corner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FightTotals {
    pub strikes: u32,
    pub sig_strikes: u32,
    pub takedowns: u32,
    pub takedown_attempts: u32,
    pub submission_attempts: u32,
    /// Sum of scored rounds
    pub score: u32,
}

impl FightTotals {
    fn add_round(&mut self, line: &CornerStats) {
        self.strikes += line.strikes;
        self.sig_strikes += line.sig_strikes;
        self.takedowns += line.takedowns;
        self.takedown_attempts += line.takedown_attempts;
        self.submission_attempts += line.submission_attempts;
    }
}

/// Outcome of a bout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightResult {
    pub first: FighterId,
    pub second: FighterId,
    pub winner: FighterId,
    pub loser: FighterId,
    pub winning_corner: Corner,
    pub method: FinishMethod,
    /// Round the fight ended in
    pub round: u32,
    pub time: FightClock,
    pub is_title: bool,
    pub first_totals: FightTotals,
    pub second_totals: FightTotals,
    pub rounds: Vec<RoundStats>,
}

impl FightResult {
    pub fn totals(&self, corner: Corner) -> &FightTotals {
        match corner {
            Corner::First => &self.first_totals,
            Corner::Second => &self.second_totals,
        }
    }

    pub fn is_finish(&self) -> bool {
        self.method.is_finish()
    }
}

/// Scheduled rounds for a bout
pub fn rounds_for(is_title: bool) -> u32 {
    if is_title {
        TITLE_FIGHT_ROUNDS
    } else {
        STANDARD_FIGHT_ROUNDS
    }
}

/// Classify a decision by the margin on the scorecards
fn decision_kind<R: Rng + ?Sized>(margin: u32, rng: &mut R) -> DecisionKind {
    if margin >= UNANIMOUS_MARGIN {
        DecisionKind::Unanimous
    } else if margin == CLOSE_MARGIN {
        if rng.gen_bool(CLOSE_UNANIMOUS_CHANCE) {
            DecisionKind::Unanimous
        } else {
            DecisionKind::Split
        }
    } else if rng.gen_bool(NARROW_SPLIT_CHANCE) {
        DecisionKind::Split
    } else {
        DecisionKind::Majority
    }
}

/// Higher total score wins; level cards go to a coin flip
fn decision_winner<R: Rng + ?Sized>(first_score: u32, second_score: u32, rng: &mut R) -> Corner {
    match first_score.cmp(&second_score) {
        Ordering::Greater => Corner::First,
        Ordering::Less => Corner::Second,
        Ordering::Equal => {
            if rng.gen_bool(0.5) {
                Corner::First
            } else {
                Corner::Second
            }
        }
    }
}

/// Resolve a complete fight between `first` and `second`
pub fn resolve_fight<R: Rng + ?Sized>(
    first: &Fighter,
    second: &Fighter,
    is_title: bool,
    rng: &mut R,
) -> FightResult {
    let total_rounds = rounds_for(is_title);
    let mut first_totals = FightTotals::default();
    let mut second_totals = FightTotals::default();
    let mut first_damage = 0.0;
    let mut second_damage = 0.0;
    let mut rounds = Vec::with_capacity(total_rounds as usize);
    let mut finish = None;

    for round in 1..=total_rounds {
        let ctx = RoundContext { round, total_rounds, first_damage, second_damage };
        let stats = simulate_round(first, second, ctx, rng);

        first_totals.add_round(&stats.first);
        second_totals.add_round(&stats.second);
        if let Some(score) = stats.score {
            first_totals.score += u32::from(score.first);
            second_totals.score += u32::from(score.second);
        }
        first_damage += stats.first.new_damage;
        second_damage += stats.second.new_damage;

        finish = stats.finish;
        rounds.push(stats);
        if finish.is_some() {
            break;
        }
    }

    let (winning_corner, method, round, time) = match finish {
        Some(finish) => (finish.winner, finish.method, finish.round, finish.time),
        None => {
            let winner = decision_winner(first_totals.score, second_totals.score, rng);
            let margin = first_totals.score.abs_diff(second_totals.score);
            let kind = decision_kind(margin, rng);
            (winner, FinishMethod::Decision(kind), total_rounds, FightClock::FULL_ROUND)
        }
    };

    let (winner, loser) = match winning_corner {
        Corner::First => (first.id, second.id),
        Corner::Second => (second.id, first.id),
    };

    tracing::debug!(
        "{} vs {}: winner {} by {} in round {} at {}",
        first.name,
        second.name,
        if winner == first.id { &first.name } else { &second.name },
        method,
        round,
        time
    );

    FightResult {
        first: first.id,
        second: second.id,
        winner,
        loser,
        winning_corner,
        method,
        round,
        time,
        is_title,
        first_totals,
        second_totals,
        rounds,
    }
}
