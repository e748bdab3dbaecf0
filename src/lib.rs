//! Fight Night - MMA promotion simulator
//!
//! Simulates fights round by round, books cards from a ranked roster and
//! keeps division rankings, champions and records consistent across a
//! season of events. All randomness comes from an injected generator, so a
//! seeded run is fully reproducible.

pub mod core;
pub mod event;
pub mod fight;
pub mod matchmaking;
pub mod rankings;
pub mod roster;
