//! Matchmaking - turns a roster into a fight card

pub mod builder;
pub mod card;
pub mod constants;

pub use builder::{build_card, UsedFighters};
pub use card::{CardPosition, Fight, FightCard};
