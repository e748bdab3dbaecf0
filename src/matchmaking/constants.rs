//! Matchmaking constants

/// Running-order slot reserved for the main event
pub const MAIN_EVENT_ORDER: u32 = 1000;
/// Co-main title fights are ordered from here upward
pub const TITLE_FIGHT_ORDER_BASE: u32 = 100;

/// Title fights are only booked from this event number on
pub const TITLE_FIGHTS_FROM_EVENT: u32 = 3;
/// Title-count roll: at or below NONE books zero, at or below ONE books one, else two
pub const TITLE_ROLL_NONE: f64 = 0.3;
pub const TITLE_ROLL_ONE: f64 = 0.8;
pub const MAX_TITLE_FIGHTS: usize = 2;

/// Main card is 4-5 bouts including title fights
pub const MAIN_CARD_BASE: u32 = 4;
/// Prelims are 3-4 bouts
pub const PRELIM_BASE: u32 = 3;
pub const CARD_SIZE_SPREAD: u32 = 2;

/// Main-card opponents are sought within this many ranking places
pub const RANK_WINDOW: u32 = 5;
/// Prelim fighters are ranked strictly below this position
pub const PRELIM_MIN_RANKING: u32 = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_event_outranks_title_fights() {
        assert!(MAIN_EVENT_ORDER > TITLE_FIGHT_ORDER_BASE + MAX_TITLE_FIGHTS as u32);
        assert!(TITLE_FIGHT_ORDER_BASE > MAIN_CARD_BASE + CARD_SIZE_SPREAD);
    }

    #[test]
    fn test_title_roll_thresholds_ordered() {
        assert!(TITLE_ROLL_NONE < TITLE_ROLL_ONE && TITLE_ROLL_ONE < 1.0);
    }
}
