//! Season output and serialization

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::types::FighterId;
use crate::event::history::FightHistory;
use crate::event::simulation::{EventOutcome, EventStats, Organization};
use crate::matchmaking::card::CardPosition;
use crate::rankings::P4PEntry;
use crate::roster::fighter::Fighter;
use crate::roster::store::Roster;

/// One line of an event's results
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoutLine {
    pub division: String,
    pub position: CardPosition,
    pub winner: String,
    pub loser: String,
    pub method: String,
    pub round: u32,
    pub time: String,
    pub is_title: bool,
}

/// Readable summary of a completed event
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventReport {
    pub event_number: u32,
    pub name: String,
    pub bouts: Vec<BoutLine>,
    pub stats: EventStats,
}

impl EventReport {
    /// Bouts are listed in running order, main event last
    pub fn from_outcome(outcome: &EventOutcome, roster: &Roster) -> Self {
        let name_of = |id: FighterId| {
            roster.get(id).map(|f| f.name.clone()).unwrap_or_else(|| id.to_string())
        };
        let bouts = outcome
            .event
            .card
            .running_order()
            .into_iter()
            .filter_map(|id| outcome.event.card.get(id))
            .filter_map(|fight| {
                let result = fight.result.as_ref()?;
                Some(BoutLine {
                    division: fight.division.to_string(),
                    position: fight.position,
                    winner: name_of(result.winner),
                    loser: name_of(result.loser),
                    method: result.method.to_string(),
                    round: result.round,
                    time: result.time.to_string(),
                    is_title: fight.is_title,
                })
            })
            .collect();

        Self {
            event_number: outcome.event.event_number,
            name: outcome.event.name.clone(),
            bouts,
            stats: outcome.stats,
        }
    }
}

/// A division's belt holder at the end of the season
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChampionEntry {
    pub division: String,
    pub fighter: String,
    pub record: String,
    pub title_defenses: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonStats {
    pub events_simulated: u32,
    pub simulation_time_ms: u64,
    pub total_fights: u32,
    pub knockouts: u32,
    pub submissions: u32,
    pub decisions: u32,
    pub title_fights: u32,
    pub title_changes: u32,
}

/// Complete season output
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeasonOutput {
    pub organization: Organization,
    pub events: Vec<EventReport>,
    pub champions: Vec<ChampionEntry>,
    pub p4p: Vec<P4PEntry>,
    pub fighters: Vec<Fighter>,
    pub history: FightHistory,
    pub statistics: SeasonStats,
}

impl SeasonOutput {
    pub fn new(
        organization: Organization,
        roster: Roster,
        history: FightHistory,
        events: Vec<EventReport>,
        p4p: Vec<P4PEntry>,
        elapsed: Duration,
    ) -> Self {
        let mut statistics = SeasonStats {
            events_simulated: events.len() as u32,
            simulation_time_ms: elapsed.as_millis() as u64,
            ..SeasonStats::default()
        };
        for report in &events {
            let stats = &report.stats;
            statistics.total_fights += stats.fights;
            statistics.knockouts += stats.knockouts;
            statistics.submissions += stats.submissions;
            statistics.decisions += stats.decisions;
            statistics.title_fights += stats.title_fights;
            statistics.title_changes += stats.title_changes;
        }

        let champions = roster
            .champions()
            .into_iter()
            .filter_map(|(division, id)| {
                let champ = roster.get(id)?;
                Some(ChampionEntry {
                    division: division.to_string(),
                    fighter: champ.name.clone(),
                    record: champ.record.to_string(),
                    title_defenses: champ.title_defenses,
                })
            })
            .collect();

        Self {
            organization,
            events,
            champions,
            p4p,
            fighters: roster.into_fighters(),
            history,
            statistics,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn summary(&self) -> String {
        let mut out = format!(
            "{}: {} events in {}ms\n{} fights ({} KO/TKO, {} submissions, {} decisions), \
             {} title fights, {} new champions",
            self.organization.name,
            self.statistics.events_simulated,
            self.statistics.simulation_time_ms,
            self.statistics.total_fights,
            self.statistics.knockouts,
            self.statistics.submissions,
            self.statistics.decisions,
            self.statistics.title_fights,
            self.statistics.title_changes,
        );
        for champ in &self.champions {
            out.push_str(&format!(
                "\n  {} champion: {} ({}, {} defenses)",
                champ.division, champ.fighter, champ.record, champ.title_defenses
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::core::config::SimulationConfig;
    use crate::event::simulation::simulate_season;

    #[test]
    fn test_statistics_add_up() {
        let config = SimulationConfig {
            events: 5,
            fighters_per_division: 6,
            ..SimulationConfig::default()
        };
        let output = simulate_season(&config).unwrap();
        let stats = &output.statistics;
        assert_eq!(stats.events_simulated, 5);
        assert_eq!(stats.knockouts + stats.submissions + stats.decisions, stats.total_fights);
        assert_eq!(output.history.len() as u32, stats.total_fights);
        assert!(output.p4p.len() <= 15);
    }

    #[test]
    fn test_json_round_trips_through_serde() {
        let config = SimulationConfig {
            events: 3,
            fighters_per_division: 4,
            ..SimulationConfig::default()
        };
        let output = simulate_season(&config).unwrap();
        let json = output.to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["organization"]["event_count"], 3);
        assert!(value["events"].as_array().unwrap().len() == 3);
    }

    #[test]
    fn test_summary_mentions_organization() {
        let config = SimulationConfig {
            events: 1,
            fighters_per_division: 4,
            ..SimulationConfig::default()
        };
        let output = simulate_season(&config).unwrap();
        assert!(output.summary().starts_with("Fight Night Championship: 1 events"));
    }
}
