//! Bout history

use serde::{Deserialize, Serialize};

use crate::core::types::{EventId, FightId, FighterId};
use crate::fight::method::FinishMethod;
use crate::matchmaking::card::Fight;

/// A completed bout
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoutRecord {
    pub event_id: EventId,
    pub event_number: u32,
    pub fight_id: FightId,
    pub winner: FighterId,
    pub loser: FighterId,
    pub method: FinishMethod,
    pub is_title: bool,
}

impl BoutRecord {
    pub fn involves(&self, fighter: FighterId) -> bool {
        self.winner == fighter || self.loser == fighter
    }
}

/// Append-only log of completed bouts
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FightHistory {
    pub bouts: Vec<BoutRecord>,
}

impl FightHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bouts.is_empty()
    }

    /// Log a completed fight. Scheduled fights are ignored.
    pub fn record(&mut self, event_id: EventId, event_number: u32, fight: &Fight) {
        if let Some(result) = &fight.result {
            self.bouts.push(BoutRecord {
                event_id,
                event_number,
                fight_id: fight.id,
                winner: result.winner,
                loser: result.loser,
                method: result.method,
                is_title: fight.is_title,
            });
        }
    }

    pub fn bouts_for(&self, fighter: FighterId) -> impl Iterator<Item = &BoutRecord> {
        self.bouts.iter().filter(move |b| b.involves(fighter))
    }

    /// Previous meetings between two fighters, in either corner
    pub fn bouts_between(&self, a: FighterId, b: FighterId) -> usize {
        self.bouts.iter().filter(|bout| bout.involves(a) && bout.involves(b)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fight::method::DecisionKind;

    fn bout(winner: FighterId, loser: FighterId) -> BoutRecord {
        BoutRecord {
            event_id: EventId::new(),
            event_number: 1,
            fight_id: FightId::new(),
            winner,
            loser,
            method: FinishMethod::Decision(DecisionKind::Unanimous),
            is_title: false,
        }
    }

    #[test]
    fn test_bouts_between_either_corner() {
        let (a, b, c) = (FighterId::new(), FighterId::new(), FighterId::new());
        let history = FightHistory { bouts: vec![bout(a, b), bout(b, a), bout(a, c)] };
        assert_eq!(history.bouts_between(a, b), 2);
        assert_eq!(history.bouts_between(b, a), 2);
        assert_eq!(history.bouts_between(b, c), 0);
        assert_eq!(history.bouts_for(a).count(), 3);
    }
}
