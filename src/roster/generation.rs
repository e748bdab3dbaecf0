//! Roster generation
//!
//! Builds a full organization roster from the weight-class tables. Names
//! are placeholders; real name data comes from the surrounding game.

use rand::Rng;

use crate::core::error::Result;
use crate::core::types::{FighterId, Gender};
use crate::rankings::rerank;
use crate::roster::division::{weight_classes, DivisionKey};
use crate::roster::fighter::{Fighter, Skills};
use crate::roster::store::Roster;

/// Nationalities with draw weights
const COUNTRIES: [(&str, u32); 24] = [
    ("USA", 25),
    ("BRA", 15),
    ("RUS", 10),
    ("GBR", 5),
    ("MEX", 5),
    ("CAN", 4),
    ("AUS", 3),
    ("POL", 3),
    ("JPN", 3),
    ("KOR", 2),
    ("CHN", 3),
    ("FRA", 3),
    ("GER", 2),
    ("NED", 2),
    ("SWE", 2),
    ("IRL", 2),
    ("NZL", 2),
    ("ARG", 2),
    ("CZE", 2),
    ("UKR", 2),
    ("KAZ", 1),
    ("GEO", 1),
    ("NGA", 1),
    ("CMR", 1),
];

const SKILL_FLOOR: i32 = 40;
const SKILL_CEILING: i32 = 95;

/// Fighters per women's division for a given men's division size
pub fn women_per_division(fighters_per_division: u32) -> u32 {
    (fighters_per_division * 6 / 10).max(4)
}

/// Total fighters [`generate_roster`] produces
pub fn roster_size(fighters_per_division: u32) -> usize {
    let men = weight_classes(Gender::Men).len() * fighters_per_division as usize;
    let women = weight_classes(Gender::Women).len()
        * women_per_division(fighters_per_division) as usize;
    men + women
}

fn random_country<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    let total: u32 = COUNTRIES.iter().map(|(_, w)| w).sum();
    let mut roll = rng.gen_range(0..total);
    for (code, weight) in COUNTRIES {
        if roll < weight {
            return code;
        }
        roll -= weight;
    }
    "USA"
}

/// Skills cluster around a per-fighter base so prospects have a shape
fn random_skills<R: Rng + ?Sized>(rng: &mut R) -> Skills {
    let base: i32 = rng.gen_range(50..80);
    let mut skill = || (base + rng.gen_range(-10..10)).clamp(SKILL_FLOOR, SKILL_CEILING) as u8;
    Skills {
        striking: skill(),
        grappling: skill(),
        wrestling: skill(),
        cardio: skill(),
        chin: skill(),
        power: skill(),
    }
}

/// Generate one prospect for a division
pub fn generate_fighter<R: Rng + ?Sized>(
    gender: Gender,
    weight_class: u32,
    number: u32,
    rng: &mut R,
) -> Fighter {
    let id = FighterId::from_rng(rng);
    let skills = random_skills(rng);
    let division = DivisionKey::new(gender, weight_class);
    let prefix = match gender {
        Gender::Men => "",
        Gender::Women => "W",
    };
    let name = format!("Prospect {}{}-{}", prefix, division.name().replace(' ', ""), number);
    let mut fighter = Fighter::new(id, name, gender, weight_class, skills);
    fighter.country = random_country(rng).to_string();
    fighter
}

/// Generate and rank a full roster
pub fn generate_roster<R: Rng + ?Sized>(fighters_per_division: u32, rng: &mut R) -> Result<Roster> {
    let mut fighters = Vec::with_capacity(roster_size(fighters_per_division));

    for gender in [Gender::Men, Gender::Women] {
        let per_division = match gender {
            Gender::Men => fighters_per_division,
            Gender::Women => women_per_division(fighters_per_division),
        };
        for wc in weight_classes(gender) {
            for number in 1..=per_division {
                fighters.push(generate_fighter(gender, wc.weight, number, rng));
            }
        }
    }

    let mut roster = Roster::new(fighters);
    rerank(&mut roster)?;
    tracing::debug!("Generated roster of {} fighters", roster.len());
    Ok(roster)
}
