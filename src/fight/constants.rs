//! Fight model constants - all tunable values in one place

// Bout length
pub const TITLE_FIGHT_ROUNDS: u32 = 5;
pub const STANDARD_FIGHT_ROUNDS: u32 = 3;
pub const ROUND_MINUTES: u32 = 5;

// Cardio
pub const CARDIO_FLOOR: f64 = 30.0;
pub const CARDIO_LOSS_PER_ROUND: f64 = 8.0;
pub const CARDIO_LOSS_PER_DAMAGE: f64 = 0.3;

// Style selection
pub const GRAPPLING_ROUND_WEIGHT: f64 = 0.4;

// Striking volume: floor(BASE + U * SPREAD +/- advantage * SWING)
pub const STRIKES_BASE: f64 = 20.0;
pub const STRIKES_SPREAD: f64 = 30.0;
pub const STRIKES_ADVANTAGE_SWING: f64 = 20.0;
pub const SIG_STRIKE_RATIO_MIN: f64 = 0.3;
pub const SIG_STRIKE_RATIO_SPREAD: f64 = 0.2;

// Takedowns
pub const STANDUP_TAKEDOWN_CHANCE: f64 = 0.3;
pub const MAX_TAKEDOWN_ATTEMPTS: u32 = 3;
pub const TAKEDOWN_BASE_RATE: f64 = 0.3;
pub const TAKEDOWN_GRAPPLING_SWING: f64 = 0.3;
pub const SUBMISSION_ATTEMPT_GATE: f64 = 0.5;

// Knockouts
pub const KO_BASE_RATE: f64 = 0.08;
pub const KO_ADVANTAGE_SWING: f64 = 0.05;
pub const CHIN_DIVISOR: f64 = 150.0;
pub const KO_MULTIPLIER_BASE: f64 = 1.2;
pub const KO_DAMAGE_DIVISOR: f64 = 150.0;
pub const KO_LATE_ROUND_BONUS: f64 = 0.8;

// Submissions
pub const SUBMISSION_RATE: f64 = 0.28;

// Scoring
pub const TAKEDOWN_SCORE_WEIGHT: i32 = 3;
/// A round won by more than this is scored 10-8
pub const DOMINANT_ROUND_MARGIN: i32 = 20;

// Damage carried into later rounds
pub const DAMAGE_PER_SIG_STRIKE: f64 = 0.5;
pub const DAMAGE_PER_TAKEDOWN: f64 = 2.0;

// Decisions
pub const UNANIMOUS_MARGIN: u32 = 3;
pub const CLOSE_MARGIN: u32 = 2;
pub const CLOSE_UNANIMOUS_CHANCE: f64 = 0.5;
pub const NARROW_SPLIT_CHANCE: f64 = 0.7;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_fights_are_longer() {
        assert!(TITLE_FIGHT_ROUNDS > STANDARD_FIGHT_ROUNDS);
    }

    #[test]
    fn test_probabilities_reasonable() {
        for p in [
            GRAPPLING_ROUND_WEIGHT,
            STANDUP_TAKEDOWN_CHANCE,
            SUBMISSION_ATTEMPT_GATE,
            KO_BASE_RATE,
            SUBMISSION_RATE,
            CLOSE_UNANIMOUS_CHANCE,
            NARROW_SPLIT_CHANCE,
        ] {
            assert!(p > 0.0 && p < 1.0);
        }
    }

    #[test]
    fn test_sig_strike_ratio_below_one() {
        assert!(SIG_STRIKE_RATIO_MIN + SIG_STRIKE_RATIO_SPREAD < 1.0);
    }
}
