pub mod config;
pub mod error;
pub mod types;

pub use config::{OrganizationConfig, SimulationConfig};
pub use error::{FightNightError, Result};
pub use types::{Corner, EventId, FightId, FighterId, Gender, OrganizationId};
