//! Roster - arena of fighters with an id index
//!
//! The simulation never edits a live roster field by field. Results are
//! applied to a cloned snapshot, the snapshot is diffed against the live roster
//! and the resulting delta set is committed in one step with
//! [`Roster::apply_deltas`].

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::core::error::{FightNightError, Result};
use crate::core::types::FighterId;
use crate::roster::division::DivisionKey;
use crate::roster::fighter::{Fighter, Record};

/// New values for every mutable field of a fighter that changed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FighterDelta {
    pub id: FighterId,
    pub previous_ranking: u32,
    pub ranking: u32,
    pub is_champion: bool,
    pub title_defenses: u32,
    pub title_reigns: u32,
    pub record: Record,
    pub win_streak: u32,
    pub loss_streak: u32,
}

impl FighterDelta {
    fn capture(before: &Fighter, after: &Fighter) -> Self {
        Self {
            id: after.id,
            previous_ranking: before.ranking,
            ranking: after.ranking,
            is_champion: after.is_champion,
            title_defenses: after.title_defenses,
            title_reigns: after.title_reigns,
            record: after.record,
            win_streak: after.win_streak,
            loss_streak: after.loss_streak,
        }
    }

    fn apply_to(&self, fighter: &mut Fighter) {
        fighter.ranking = self.ranking;
        fighter.is_champion = self.is_champion;
        fighter.title_defenses = self.title_defenses;
        fighter.title_reigns = self.title_reigns;
        fighter.record = self.record;
        fighter.win_streak = self.win_streak;
        fighter.loss_streak = self.loss_streak;
    }
}

/// All fighters of one organization
#[derive(Debug, Clone, Default)]
pub struct Roster {
    fighters: Vec<Fighter>,
    index: AHashMap<FighterId, usize>,
}

impl Roster {
    pub fn new(fighters: Vec<Fighter>) -> Self {
        let index = fighters
            .iter()
            .enumerate()
            .map(|(idx, f)| (f.id, idx))
            .collect();
        Self { fighters, index }
    }

    pub fn len(&self) -> usize {
        self.fighters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fighters.is_empty()
    }

    pub fn fighters(&self) -> &[Fighter] {
        &self.fighters
    }

    pub fn into_fighters(self) -> Vec<Fighter> {
        self.fighters
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &Fighter> {
        self.fighters.iter().filter(|f| f.is_active())
    }

    pub fn active_count(&self) -> usize {
        self.iter_active().count()
    }

    pub fn get(&self, id: FighterId) -> Option<&Fighter> {
        self.index.get(&id).map(|&idx| &self.fighters[idx])
    }

    pub fn get_mut(&mut self, id: FighterId) -> Option<&mut Fighter> {
        self.index.get(&id).map(|&idx| &mut self.fighters[idx])
    }

    /// Like [`Roster::get`] but a missing id is an error
    pub fn require(&self, id: FighterId) -> Result<&Fighter> {
        self.get(id).ok_or(FightNightError::FighterNotFound(id))
    }

    pub fn require_mut(&mut self, id: FighterId) -> Result<&mut Fighter> {
        self.get_mut(id).ok_or(FightNightError::FighterNotFound(id))
    }

    /// Add a fighter, replacing any existing entry with the same id
    pub fn push(&mut self, fighter: Fighter) {
        match self.index.get(&fighter.id) {
            Some(&idx) => self.fighters[idx] = fighter,
            None => {
                self.index.insert(fighter.id, self.fighters.len());
                self.fighters.push(fighter);
            }
        }
    }

    /// Retire a fighter. A retiring champion vacates the belt.
    pub fn retire(&mut self, id: FighterId) -> Result<()> {
        let fighter = self.require_mut(id)?;
        fighter.status = crate::roster::fighter::FighterStatus::Retired;
        fighter.strip_title();
        Ok(())
    }

    /// Active fighters grouped by division, champion first then by ranking
    pub fn divisions(&self) -> BTreeMap<DivisionKey, Vec<&Fighter>> {
        let mut divisions: BTreeMap<DivisionKey, Vec<&Fighter>> = BTreeMap::new();
        for fighter in self.iter_active() {
            divisions.entry(fighter.division()).or_default().push(fighter);
        }
        for pool in divisions.values_mut() {
            pool.sort_by_key(|f| (!f.is_champion, f.ranking, f.id));
        }
        divisions
    }

    /// Current champion of every division that has one
    pub fn champions(&self) -> BTreeMap<DivisionKey, FighterId> {
        self.iter_active()
            .filter(|f| f.is_champion)
            .map(|f| (f.division(), f.id))
            .collect()
    }

    /// Check the ranking invariants of every division:
    /// at most one champion, rank 0 iff champion, no shared rankings.
    pub fn validate(&self) -> Result<()> {
        for (division, pool) in self.divisions() {
            let champions = pool.iter().filter(|f| f.is_champion).count();
            if champions > 1 {
                return Err(FightNightError::MultipleChampions(division));
            }

            let mut seen = HashSet::new();
            for fighter in &pool {
                if (fighter.ranking == 0) != fighter.is_champion {
                    return Err(FightNightError::InvariantViolation(format!(
                        "{} in {} has ranking {} but is_champion = {}",
                        fighter.name, division, fighter.ranking, fighter.is_champion
                    )));
                }
                if !seen.insert(fighter.ranking) {
                    return Err(FightNightError::InvariantViolation(format!(
                        "ranking {} is shared in {}",
                        fighter.ranking, division
                    )));
                }
            }
        }
        Ok(())
    }

    /// Deltas for every fighter whose mutable state differs in `staged`
    pub fn diff(&self, staged: &Roster) -> Vec<FighterDelta> {
        self.fighters
            .iter()
            .filter_map(|before| {
                let after = staged.get(before.id)?;
                (before != after).then(|| FighterDelta::capture(before, after))
            })
            .collect()
    }

    /// Apply a delta set as a single unit.
    ///
    /// Deltas are applied to a copy which must pass [`Roster::validate`];
    /// on any error the roster is left untouched.
    pub fn apply_deltas(&mut self, deltas: &[FighterDelta]) -> Result<()> {
        let mut staged = self.clone();
        for delta in deltas {
            delta.apply_to(staged.require_mut(delta.id)?);
        }
        staged.validate()?;
        *self = staged;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(name: &str, ranking: u32) -> Fighter {
        let mut fighter = Fighter::test_lightweight(name, 60);
        fighter.ranking = ranking;
        fighter
    }

    #[test]
    fn test_lookup_by_id() {
        let a = ranked("A", 1);
        let id = a.id;
        let roster = Roster::new(vec![a, ranked("B", 2)]);
        assert_eq!(roster.require(id).unwrap().name, "A");
        assert!(matches!(
            roster.require(FighterId::new()),
            Err(FightNightError::FighterNotFound(_))
        ));
    }

    #[test]
    fn test_divisions_put_champion_first() {
        let mut champ = ranked("Champ", 0);
        champ.is_champion = true;
        let roster = Roster::new(vec![ranked("Two", 2), ranked("One", 1), champ]);
        let divisions = roster.divisions();
        let pool = &divisions[&DivisionKey::new(crate::core::types::Gender::Men, 70)];
        let names: Vec<_> = pool.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Champ", "One", "Two"]);
    }

    #[test]
    fn test_validate_rejects_shared_ranking() {
        let roster = Roster::new(vec![ranked("A", 1), ranked("B", 1)]);
        assert!(matches!(roster.validate(), Err(FightNightError::InvariantViolation(_))));
    }

    #[test]
    fn test_validate_rejects_two_champions() {
        let mut a = ranked("A", 0);
        a.is_champion = true;
        let mut b = ranked("B", 0);
        b.is_champion = true;
        let roster = Roster::new(vec![a, b]);
        assert!(matches!(roster.validate(), Err(FightNightError::MultipleChampions(_))));
    }

    #[test]
    fn test_failed_commit_leaves_roster_untouched() {
        let a = ranked("A", 1);
        let b = ranked("B", 2);
        let (a_id, b_id) = (a.id, b.id);
        let mut roster = Roster::new(vec![a, b]);

        let mut staged = roster.clone();
        staged.require_mut(a_id).unwrap().ranking = 2;
        let deltas = roster.diff(&staged);
        assert_eq!(deltas.len(), 1);

        assert!(roster.apply_deltas(&deltas).is_err());
        assert_eq!(roster.require(a_id).unwrap().ranking, 1);
        assert_eq!(roster.require(b_id).unwrap().ranking, 2);
    }

    #[test]
    fn test_commit_applies_all_deltas() {
        let a = ranked("A", 1);
        let b = ranked("B", 2);
        let (a_id, b_id) = (a.id, b.id);
        let mut roster = Roster::new(vec![a, b]);

        let mut staged = roster.clone();
        staged.require_mut(a_id).unwrap().ranking = 2;
        staged.require_mut(b_id).unwrap().ranking = 1;
        let deltas = roster.diff(&staged);
        roster.apply_deltas(&deltas).unwrap();

        assert_eq!(roster.require(a_id).unwrap().ranking, 2);
        assert_eq!(roster.require(b_id).unwrap().ranking, 1);
    }

    #[test]
    fn test_retiring_champion_vacates() {
        let mut champ = ranked("Champ", 0);
        champ.is_champion = true;
        let id = champ.id;
        let mut roster = Roster::new(vec![champ]);
        roster.retire(id).unwrap();
        assert!(roster.champions().is_empty());
        assert_eq!(roster.active_count(), 0);
    }
}
