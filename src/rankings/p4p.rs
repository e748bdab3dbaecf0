//! Pound-for-pound list across every division

use serde::{Deserialize, Serialize};

use crate::core::types::FighterId;
use crate::roster::fighter::Fighter;

pub const P4P_SIZE: usize = 15;

/// One place on the pound-for-pound list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct P4PEntry {
    /// 1-based
    pub rank: u32,
    pub id: FighterId,
    pub name: String,
    pub score: f64,
}

/// Weight-agnostic score.
///
/// Finish rate is finishes over all fights, the same rate the division score
/// uses, not finishes over wins.
pub fn p4p_score(fighter: &Fighter) -> f64 {
    let record = &fighter.record;
    let champion_bonus = if fighter.is_champion { 20.0 } else { 0.0 };
    (5.0 * f64::from(fighter.win_streak)).min(25.0)
        - (5.0 * f64::from(fighter.loss_streak)).min(15.0)
        + champion_bonus
        + 20.0 * record.win_pct()
        + 15.0 * record.finish_rate()
        + 3.0 * f64::from(fighter.title_defenses)
        + 10.0 * (fighter.skills.average() / 100.0)
}

/// Top fighters regardless of weight, best first
pub fn pound_for_pound(fighters: &[Fighter]) -> Vec<P4PEntry> {
    let mut scored: Vec<(f64, &Fighter)> = fighters
        .iter()
        .filter(|f| f.is_active())
        .map(|f| (p4p_score(f), f))
        .collect();
    scored.sort_by(|(sa, a), (sb, b)| sb.total_cmp(sa).then(a.id.cmp(&b.id)));

    scored
        .into_iter()
        .take(P4P_SIZE)
        .enumerate()
        .map(|(idx, (score, fighter))| P4PEntry {
            rank: idx as u32 + 1,
            id: fighter.id,
            name: fighter.name.clone(),
            score,
        })
        .collect()
}
