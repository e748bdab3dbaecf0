//! Applying fight results to fighter records and titles

use crate::core::error::{FightNightError, Result};
use crate::fight::method::MethodCategory;
use crate::fight::resolver::FightResult;
use crate::matchmaking::card::Fight;
use crate::roster::store::Roster;

/// What a title fight did to the belt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleChange {
    None,
    Defended,
    NewChampion,
    Crowned,
}

/// Update records, streaks and titles for one result.
///
/// Rankings are left alone; re-rank once the whole card is applied.
pub fn apply_result(
    roster: &mut Roster,
    fight: &Fight,
    result: &FightResult,
) -> Result<TitleChange> {
    if !(fight.involves(result.winner) && fight.involves(result.loser)) {
        return Err(FightNightError::InvariantViolation(format!(
            "result does not belong to fight {}",
            fight.id
        )));
    }

    let loser_was_champion = {
        let loser = roster.require_mut(result.loser)?;
        loser.record_loss();
        let was_champion = loser.is_champion;
        if fight.is_title && was_champion {
            loser.strip_title();
        }
        was_champion
    };

    let winner = roster.require_mut(result.winner)?;
    winner.record_win();
    match result.method.category() {
        MethodCategory::Knockout => winner.record.ko_wins += 1,
        MethodCategory::Submission => winner.record.sub_wins += 1,
        MethodCategory::Decision => winner.record.dec_wins += 1,
    }

    if !fight.is_title {
        return Ok(TitleChange::None);
    }

    let change = if loser_was_champion {
        winner.crown();
        TitleChange::NewChampion
    } else if winner.is_champion {
        winner.title_defenses += 1;
        TitleChange::Defended
    } else {
        winner.crown();
        TitleChange::Crowned
    };
    tracing::debug!("{} title: {:?} ({})", fight.division, change, winner.name);
    Ok(change)
}
