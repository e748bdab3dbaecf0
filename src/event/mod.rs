//! Events - scheduling, running and committing fight nights

pub mod history;
pub mod output;
pub mod results;
pub mod simulation;

pub use history::{BoutRecord, FightHistory};
pub use output::{BoutLine, ChampionEntry, EventReport, SeasonOutput, SeasonStats};
pub use results::{apply_result, TitleChange};
pub use simulation::{
    commit_event, run_event, schedule_event, simulate_season, Event, EventOutcome, EventStats,
    EventStatus, Organization,
};
