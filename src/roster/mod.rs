//! Roster - fighters, divisions and the roster arena

pub mod division;
pub mod fighter;
pub mod generation;
pub mod store;

pub use division::{weight_class_name, weight_classes, DivisionKey, WeightClass};
pub use fighter::{Fighter, FighterStatus, Record, Skills, UNRANKED};
pub use generation::{generate_fighter, generate_roster};
pub use store::{FighterDelta, Roster};
