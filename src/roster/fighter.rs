//! Fighter - identity, skills, record and standing

use serde::{Deserialize, Serialize};

use crate::core::types::{FighterId, Gender};
use crate::roster::division::DivisionKey;

/// Placeholder ranking for fighters who have not been ranked yet
pub const UNRANKED: u32 = 999;

/// Six skill attributes, each in 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    pub striking: u8,
    pub grappling: u8,
    pub wrestling: u8,
    pub cardio: u8,
    pub chin: u8,
    pub power: u8,
}

impl Skills {
    /// Every attribute set to the same value (clamped to 100)
    pub fn uniform(value: u8) -> Self {
        let v = value.min(100);
        Self {
            striking: v,
            grappling: v,
            wrestling: v,
            cardio: v,
            chin: v,
            power: v,
        }
    }

    /// Copy with every attribute clamped into 0..=100
    pub fn clamped(self) -> Self {
        Self {
            striking: self.striking.min(100),
            grappling: self.grappling.min(100),
            wrestling: self.wrestling.min(100),
            cardio: self.cardio.min(100),
            chin: self.chin.min(100),
            power: self.power.min(100),
        }
    }

    /// Mean of the six attributes
    pub fn average(&self) -> f64 {
        let sum: u32 = [
            self.striking,
            self.grappling,
            self.wrestling,
            self.cardio,
            self.chin,
            self.power,
        ]
        .iter()
        .map(|&s| u32::from(s))
        .sum();
        f64::from(sum) / 6.0
    }

    /// Rounded overall rating shown on fighter cards
    pub fn overall(&self) -> u8 {
        self.average().round() as u8
    }
}

impl Default for Skills {
    fn default() -> Self {
        Self::uniform(50)
    }
}

/// Professional record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub ko_wins: u32,
    pub sub_wins: u32,
    pub dec_wins: u32,
}

impl Record {
    pub fn total_fights(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// wins / total fights; 0 for a debutant
    pub fn win_pct(&self) -> f64 {
        match self.total_fights() {
            0 => 0.0,
            total => f64::from(self.wins) / f64::from(total),
        }
    }

    /// (KO + submission wins) / total fights; 0 for a debutant
    pub fn finish_rate(&self) -> f64 {
        match self.total_fights() {
            0 => 0.0,
            total => f64::from(self.ko_wins + self.sub_wins) / f64::from(total),
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.wins, self.losses, self.draws)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FighterStatus {
    Active,
    Retired,
}

/// A rostered fighter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fighter {
    pub id: FighterId,
    pub name: String,
    pub gender: Gender,
    pub country: String,
    /// Division limit in kg
    pub weight_class: u32,
    pub skills: Skills,
    pub record: Record,
    pub win_streak: u32,
    pub loss_streak: u32,
    /// 0 is the champion, 1..N contenders
    pub ranking: u32,
    pub is_champion: bool,
    pub title_defenses: u32,
    #[serde(default)]
    pub title_reigns: u32,
    pub status: FighterStatus,
}

impl Fighter {
    /// Active, unranked newcomer with an empty record
    pub fn new(
        id: FighterId,
        name: impl Into<String>,
        gender: Gender,
        weight_class: u32,
        skills: Skills,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            gender,
            country: String::new(),
            weight_class,
            skills: skills.clamped(),
            record: Record::default(),
            win_streak: 0,
            loss_streak: 0,
            ranking: UNRANKED,
            is_champion: false,
            title_defenses: 0,
            title_reigns: 0,
            status: FighterStatus::Active,
        }
    }

    pub fn division(&self) -> DivisionKey {
        DivisionKey::new(self.gender, self.weight_class)
    }

    pub fn is_active(&self) -> bool {
        self.status == FighterStatus::Active
    }

    /// Last word of the name, used on event posters
    pub fn last_name(&self) -> &str {
        self.name.split_whitespace().last().unwrap_or(&self.name)
    }

    pub fn record_win(&mut self) {
        self.record.wins += 1;
        self.win_streak += 1;
        self.loss_streak = 0;
    }

    pub fn record_loss(&mut self) {
        self.record.losses += 1;
        self.loss_streak += 1;
        self.win_streak = 0;
    }

    /// Takes the belt: champion at rank 0 with a fresh defense count
    pub fn crown(&mut self) {
        self.is_champion = true;
        self.ranking = 0;
        self.title_defenses = 0;
        self.title_reigns += 1;
    }

    pub fn strip_title(&mut self) {
        self.is_champion = false;
    }

    // Test fixtures

    /// Lightweight with every skill at `level`
    pub fn test_lightweight(name: &str, level: u8) -> Self {
        Self::new(FighterId::new(), name, Gender::Men, 70, Skills::uniform(level))
    }

    /// Heavy-handed striker with a weak chin
    pub fn test_striker() -> Self {
        Self::new(
            FighterId::new(),
            "Test Striker",
            Gender::Men,
            70,
            Skills { striking: 90, grappling: 50, wrestling: 50, cardio: 60, chin: 40, power: 80 },
        )
    }

    /// Durable grinder who cannot strike
    pub fn test_durable() -> Self {
        Self::new(
            FighterId::new(),
            "Test Durable",
            Gender::Men,
            70,
            Skills { striking: 40, grappling: 60, wrestling: 60, cardio: 70, chin: 90, power: 50 },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_average() {
        let skills = Skills {
            striking: 90,
            grappling: 60,
            wrestling: 60,
            cardio: 60,
            chin: 60,
            power: 30,
        };
        assert!((skills.average() - 60.0).abs() < 1e-9);
        assert_eq!(skills.overall(), 60);
    }

    #[test]
    fn test_skills_clamped() {
        let skills = Skills { striking: 200, ..Skills::default() }.clamped();
        assert_eq!(skills.striking, 100);
    }

    #[test]
    fn test_empty_record_rates_are_zero() {
        let record = Record::default();
        assert_eq!(record.win_pct(), 0.0);
        assert_eq!(record.finish_rate(), 0.0);
    }

    #[test]
    fn test_record_rates() {
        let record = Record { wins: 6, losses: 2, draws: 0, ko_wins: 3, sub_wins: 1, dec_wins: 2 };
        assert!((record.win_pct() - 0.75).abs() < 1e-9);
        assert!((record.finish_rate() - 0.5).abs() < 1e-9);
        assert_eq!(record.to_string(), "6-2-0");
    }

    #[test]
    fn test_streaks_are_exclusive() {
        let mut fighter = Fighter::test_lightweight("A B", 60);
        fighter.record_win();
        fighter.record_win();
        assert_eq!((fighter.win_streak, fighter.loss_streak), (2, 0));
        fighter.record_loss();
        assert_eq!((fighter.win_streak, fighter.loss_streak), (0, 1));
    }

    #[test]
    fn test_crown_resets_defenses() {
        let mut fighter = Fighter::test_lightweight("A B", 60);
        fighter.title_defenses = 4;
        fighter.ranking = 3;
        fighter.crown();
        assert!(fighter.is_champion);
        assert_eq!(fighter.ranking, 0);
        assert_eq!(fighter.title_defenses, 0);
        assert_eq!(fighter.title_reigns, 1);
    }

    #[test]
    fn test_last_name() {
        let fighter = Fighter::test_lightweight("Jose Aldo Junior", 60);
        assert_eq!(fighter.last_name(), "Junior");
    }
}
