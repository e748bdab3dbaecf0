//! Fight cards - scheduled bouts and their running order

use serde::{Deserialize, Serialize};

use crate::core::error::{FightNightError, Result};
use crate::core::types::{EventId, FightId, FighterId};
use crate::fight::resolver::FightResult;
use crate::matchmaking::constants::MAIN_EVENT_ORDER;
use crate::roster::division::DivisionKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardPosition {
    Main,
    Prelim,
}

/// A booked bout. Scheduled until a result is attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fight {
    pub id: FightId,
    pub event_id: Option<EventId>,
    pub first: FighterId,
    pub second: FighterId,
    pub position: CardPosition,
    /// Higher fights later; the main event holds [`MAIN_EVENT_ORDER`]
    pub order: u32,
    pub is_title: bool,
    pub is_vacant: bool,
    pub division: DivisionKey,
    pub result: Option<FightResult>,
}

impl Fight {
    pub fn involves(&self, fighter: FighterId) -> bool {
        self.first == fighter || self.second == fighter
    }

    pub fn is_completed(&self) -> bool {
        self.result.is_some()
    }

    pub fn is_main_event(&self) -> bool {
        self.order == MAIN_EVENT_ORDER
    }

    /// Attach the result. A fight is completed exactly once.
    pub fn complete(&mut self, result: FightResult) -> Result<()> {
        if self.is_completed() {
            return Err(FightNightError::FightAlreadyCompleted(self.id));
        }
        if !(self.involves(result.winner) && self.involves(result.loser)) {
            return Err(FightNightError::InvariantViolation(format!(
                "result for fight {} names fighters not on the bout",
                self.id
            )));
        }
        self.result = Some(result);
        Ok(())
    }
}

/// Bouts booked for one event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FightCard {
    pub fights: Vec<Fight>,
    pub main_event: Option<FightId>,
}

impl FightCard {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.fights.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fights.len()
    }

    pub fn get(&self, id: FightId) -> Option<&Fight> {
        self.fights.iter().find(|f| f.id == id)
    }

    pub fn get_mut(&mut self, id: FightId) -> Option<&mut Fight> {
        self.fights.iter_mut().find(|f| f.id == id)
    }

    pub fn main_event(&self) -> Option<&Fight> {
        self.main_event.and_then(|id| self.get(id))
    }

    pub fn title_fights(&self) -> impl Iterator<Item = &Fight> {
        self.fights.iter().filter(|f| f.is_title)
    }

    /// Every fighter booked on the card
    pub fn fighters(&self) -> impl Iterator<Item = FighterId> + '_ {
        self.fights.iter().flat_map(|f| [f.first, f.second])
    }

    pub fn assign_event(&mut self, event_id: EventId) {
        for fight in &mut self.fights {
            fight.event_id = Some(event_id);
        }
    }

    /// Fight ids in the order they take place: prelims then the main card,
    /// each from lowest to highest order
    pub fn running_order(&self) -> Vec<FightId> {
        let mut ordered: Vec<&Fight> = self.fights.iter().collect();
        ordered.sort_by_key(|f| {
            let segment = match f.position {
                CardPosition::Prelim => 0,
                CardPosition::Main => 1,
            };
            (segment, f.order)
        });
        ordered.into_iter().map(|f| f.id).collect()
    }
}
