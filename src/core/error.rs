use thiserror::Error;

use crate::core::types::{FightId, FighterId};
use crate::roster::DivisionKey;

#[derive(Error, Debug)]
pub enum FightNightError {
    #[error("Fighter not found: {0}")]
    FighterNotFound(FighterId),

    #[error("Fight already completed: {0}")]
    FightAlreadyCompleted(FightId),

    #[error("Need at least {required} active fighters to generate an event, have {available}")]
    InsufficientRoster { required: usize, available: usize },

    #[error("Could not create a fight card: no division has two eligible fighters")]
    EmptyCard,

    #[error("Division {0} has more than one champion")]
    MultipleChampions(DivisionKey),

    #[error("Roster invariant violated: {0}")]
    InvariantViolation(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FightNightError>;
