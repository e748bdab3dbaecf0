//! Round simulation
//!
//! One five-minute round between two fighters. Output is a stat line per
//! corner, plus either a 10-point-must score or a finish, never both.
//!
//! Generator draws happen in a fixed order (style, strikes, takedowns,
//! submission gates, knockout checks, submission checks, score tie-break) so
//! a seeded fight always replays the same way.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::types::Corner;
use crate::fight::constants::*;
use crate::fight::method::{FightClock, FinishMethod};
use crate::roster::fighter::Fighter;

/// One corner's output for a round
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CornerStats {
    pub strikes: u32,
    pub sig_strikes: u32,
    pub takedowns: u32,
    pub takedown_attempts: u32,
    pub submission_attempts: u32,
    /// Damage this corner absorbed during the round
    pub new_damage: f64,
}

/// Judges' 10-point-must card for a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundScore {
    pub first: u8,
    pub second: u8,
}

impl RoundScore {
    pub fn winner(&self) -> Corner {
        if self.first > self.second {
            Corner::First
        } else {
            Corner::Second
        }
    }

    pub fn for_corner(&self, corner: Corner) -> u8 {
        match corner {
            Corner::First => self.first,
            Corner::Second => self.second,
        }
    }
}

impl std::fmt::Display for RoundScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}

/// A stoppage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Finish {
    pub winner: Corner,
    pub method: FinishMethod,
    pub round: u32,
    pub time: FightClock,
}

/// Everything that happened in one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundStats {
    pub round: u32,
    pub grappling_heavy: bool,
    pub first: CornerStats,
    pub second: CornerStats,
    /// None when the round ended in a finish
    pub score: Option<RoundScore>,
    pub finish: Option<Finish>,
}

impl RoundStats {
    pub fn corner(&self, corner: Corner) -> &CornerStats {
        match corner {
            Corner::First => &self.first,
            Corner::Second => &self.second,
        }
    }
}

/// Fighter state going into a round
#[derive(Debug, Clone, Copy)]
pub struct RoundContext {
    pub round: u32,
    pub total_rounds: u32,
    pub first_damage: f64,
    pub second_damage: f64,
}

fn probability(p: f64) -> f64 {
    p.clamp(0.0, 1.0)
}

fn effective_cardio(fighter: &Fighter, round: u32, damage: f64) -> f64 {
    let faded = f64::from(fighter.skills.cardio)
        - CARDIO_LOSS_PER_ROUND * f64::from(round.saturating_sub(1))
        - CARDIO_LOSS_PER_DAMAGE * damage;
    faded.max(CARDIO_FLOOR)
}

fn strike_volume<R: Rng + ?Sized>(advantage: f64, rng: &mut R) -> (u32, u32) {
    let attempted = (STRIKES_BASE
        + rng.gen::<f64>() * STRIKES_SPREAD
        + advantage * STRIKES_ADVANTAGE_SWING)
        .floor()
        .max(0.0);
    let ratio = SIG_STRIKE_RATIO_MIN + rng.gen::<f64>() * SIG_STRIKE_RATIO_SPREAD;
    let significant = (attempted * ratio).floor();
    (attempted as u32, significant as u32)
}

fn takedown_rate(fighter: &Fighter, grappling_advantage: f64) -> f64 {
    probability(
        TAKEDOWN_BASE_RATE
            + f64::from(fighter.skills.wrestling) / 200.0
            + grappling_advantage * TAKEDOWN_GRAPPLING_SWING,
    )
}

/// Per-round knockout chance before the round multiplier
fn knockout_chance(attacker: &Fighter, defender: &Fighter, striking_advantage: f64) -> f64 {
    f64::from(attacker.skills.power) / 100.0
        * probability(KO_BASE_RATE + striking_advantage * KO_ADVANTAGE_SWING)
        * (1.0 - f64::from(defender.skills.chin) / CHIN_DIVISOR)
}

fn submission_chance(fighter: &Fighter, attempts: u32) -> f64 {
    probability(f64::from(attempts) * f64::from(fighter.skills.grappling) / 100.0 * SUBMISSION_RATE)
}

/// Simulate one round.
///
/// `first` is always the corner whose advantages are computed positively;
/// the opponent's values are the mirror image.
pub fn simulate_round<R: Rng + ?Sized>(
    first: &Fighter,
    second: &Fighter,
    ctx: RoundContext,
    rng: &mut R,
) -> RoundStats {
    let RoundContext { round, total_rounds, first_damage, second_damage } = ctx;

    let first_cardio = effective_cardio(first, round, first_damage);
    let second_cardio = effective_cardio(second, round, second_damage);

    let striking_adv = (f64::from(first.skills.striking) - f64::from(second.skills.striking))
        / 100.0
        + (first_cardio - second_cardio) / 200.0;
    let grappling_adv = (f64::from(first.skills.grappling) + f64::from(first.skills.wrestling)
        - f64::from(second.skills.grappling)
        - f64::from(second.skills.wrestling))
        / 200.0;

    let grapple_chance = probability(
        (f64::from(first.skills.wrestling) + f64::from(second.skills.wrestling)) / 200.0
            * GRAPPLING_ROUND_WEIGHT,
    );
    let grappling_heavy = rng.gen::<f64>() < grapple_chance;

    let mut a = CornerStats::default();
    let mut b = CornerStats::default();

    (a.strikes, a.sig_strikes) = strike_volume(striking_adv, rng);
    (b.strikes, b.sig_strikes) = strike_volume(-striking_adv, rng);

    if grappling_heavy || rng.gen::<f64>() < STANDUP_TAKEDOWN_CHANCE {
        a.takedown_attempts = rng.gen_range(1..=MAX_TAKEDOWN_ATTEMPTS);
        b.takedown_attempts = rng.gen_range(1..=MAX_TAKEDOWN_ATTEMPTS);
        a.takedowns =
            (f64::from(a.takedown_attempts) * takedown_rate(first, grappling_adv)).floor() as u32;
        b.takedowns =
            (f64::from(b.takedown_attempts) * takedown_rate(second, -grappling_adv)).floor() as u32;
    }

    if a.takedowns > 0 && rng.gen::<f64>() < SUBMISSION_ATTEMPT_GATE {
        a.submission_attempts = 1;
    }
    if b.takedowns > 0 && rng.gen::<f64>() < SUBMISSION_ATTEMPT_GATE {
        b.submission_attempts = 1;
    }

    let multiplier = KO_MULTIPLIER_BASE
        + (first_damage + second_damage) / KO_DAMAGE_DIVISOR
        + f64::from(round) / f64::from(total_rounds.max(1)) * KO_LATE_ROUND_BONUS;
    let first_ko = probability(knockout_chance(first, second, striking_adv) * multiplier);
    let second_ko = probability(knockout_chance(second, first, -striking_adv) * multiplier);

    let mut finish = None;
    let knockout_winner = if rng.gen::<f64>() < first_ko {
        Some(Corner::First)
    } else if rng.gen::<f64>() < second_ko {
        Some(Corner::Second)
    } else {
        None
    };
    if let Some(winner) = knockout_winner {
        let time = FightClock::random(rng);
        finish = Some(Finish { winner, method: FinishMethod::random_knockout(rng), round, time });
    }

    if finish.is_none() && (a.submission_attempts > 0 || b.submission_attempts > 0) {
        let first_sub = submission_chance(first, a.submission_attempts);
        let second_sub = submission_chance(second, b.submission_attempts);
        let submission_winner = if rng.gen::<f64>() < first_sub {
            Some(Corner::First)
        } else if rng.gen::<f64>() < second_sub {
            Some(Corner::Second)
        } else {
            None
        };
        if let Some(winner) = submission_winner {
            let time = FightClock::random(rng);
            let method = FinishMethod::random_submission(rng);
            finish = Some(Finish { winner, method, round, time });
        }
    }

    let score = if finish.is_none() {
        Some(score_round(&a, &b, rng))
    } else {
        None
    };

    a.new_damage = DAMAGE_PER_SIG_STRIKE * f64::from(b.sig_strikes)
        + DAMAGE_PER_TAKEDOWN * f64::from(b.takedowns);
    b.new_damage = DAMAGE_PER_SIG_STRIKE * f64::from(a.sig_strikes)
        + DAMAGE_PER_TAKEDOWN * f64::from(a.takedowns);

    RoundStats { round, grappling_heavy, first: a, second: b, score, finish }
}

/// 10-point must: the round always has a winner
fn score_round<R: Rng + ?Sized>(a: &CornerStats, b: &CornerStats, rng: &mut R) -> RoundScore {
    let mut value = a.sig_strikes as i32 - b.sig_strikes as i32
        + TAKEDOWN_SCORE_WEIGHT * (a.takedowns as i32 - b.takedowns as i32);
    if value == 0 {
        value = if rng.gen_bool(0.5) { 1 } else { -1 };
    }

    if value > 0 {
        let loser = if value > DOMINANT_ROUND_MARGIN { 8 } else { 9 };
        RoundScore { first: 10, second: loser }
    } else {
        let loser = if value < -DOMINANT_ROUND_MARGIN { 8 } else { 9 };
        RoundScore { first: loser, second: 10 }
    }
}
