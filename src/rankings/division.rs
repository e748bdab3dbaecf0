//! Division rankings
//!
//! Champions hold rank 0. Everyone else in the division is ordered by
//! [`rank_score`] and numbered from 1.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::error::{FightNightError, Result};
use crate::core::types::FighterId;
use crate::roster::division::DivisionKey;
use crate::roster::fighter::Fighter;
use crate::roster::store::Roster;

const WIN_PCT_WEIGHT: f64 = 30.0;
const WIN_STREAK_STEP: f64 = 8.0;
const WIN_STREAK_CAP: f64 = 40.0;
const LOSS_STREAK_STEP: f64 = 10.0;
const LOSS_STREAK_CAP: f64 = 30.0;
const FINISH_RATE_WEIGHT: f64 = 15.0;
const EXPERIENCE_CAP: u32 = 10;
const TITLE_DEFENSE_WEIGHT: f64 = 5.0;

/// A fighter whose ranking changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingUpdate {
    pub id: FighterId,
    pub ranking: u32,
}

/// Contender score used to order a division
pub fn rank_score(fighter: &Fighter) -> f64 {
    let record = &fighter.record;
    WIN_PCT_WEIGHT * record.win_pct()
        + (WIN_STREAK_STEP * f64::from(fighter.win_streak)).min(WIN_STREAK_CAP)
        - (LOSS_STREAK_STEP * f64::from(fighter.loss_streak)).min(LOSS_STREAK_CAP)
        + FINISH_RATE_WEIGHT * record.finish_rate()
        + f64::from(record.total_fights().min(EXPERIENCE_CAP))
        + TITLE_DEFENSE_WEIGHT * f64::from(fighter.title_defenses)
}

/// Rank every active fighter by division.
///
/// Returns only the fighters whose ranking differs from their current one,
/// so a second call with no new results returns nothing.
pub fn calculate_rankings(fighters: &[Fighter]) -> Result<Vec<RankingUpdate>> {
    let mut divisions: BTreeMap<DivisionKey, Vec<&Fighter>> = BTreeMap::new();
    for fighter in fighters.iter().filter(|f| f.is_active()) {
        divisions.entry(fighter.division()).or_default().push(fighter);
    }

    let mut updates = Vec::new();
    for (division, pool) in divisions {
        let (champions, mut contenders): (Vec<&Fighter>, Vec<&Fighter>) =
            pool.into_iter().partition(|f| f.is_champion);
        if champions.len() > 1 {
            return Err(FightNightError::MultipleChampions(division));
        }

        if let Some(champion) = champions.first() {
            if champion.ranking != 0 {
                updates.push(RankingUpdate { id: champion.id, ranking: 0 });
            }
        }

        contenders.sort_by(|a, b| {
            rank_score(b)
                .total_cmp(&rank_score(a))
                .then(a.ranking.cmp(&b.ranking))
                .then(a.id.cmp(&b.id))
        });
        for (idx, fighter) in contenders.iter().enumerate() {
            let ranking = idx as u32 + 1;
            if fighter.ranking != ranking {
                updates.push(RankingUpdate { id: fighter.id, ranking });
            }
        }
    }

    Ok(updates)
}

/// Recompute and write rankings into a roster
pub fn rerank(roster: &mut Roster) -> Result<Vec<RankingUpdate>> {
    let updates = calculate_rankings(roster.fighters())?;
    for update in &updates {
        roster.require_mut(update.id)?.ranking = update.ranking;
    }
    if !updates.is_empty() {
        tracing::debug!("Rankings updated for {} fighters", updates.len());
    }
    Ok(updates)
}
