//! Event pipeline
//!
//! schedule -> run -> commit. Running an event never touches the live roster:
//! every result is applied to a staged copy and the caller commits the
//! resulting deltas in one step.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::{OrganizationConfig, SimulationConfig};
use crate::core::error::{FightNightError, Result};
use crate::core::types::{EventId, OrganizationId};
use crate::event::history::FightHistory;
use crate::event::output::{EventReport, SeasonOutput};
use crate::event::results::{apply_result, TitleChange};
use crate::fight::method::MethodCategory;
use crate::fight::resolver::{resolve_fight, FightResult};
use crate::matchmaking::builder::build_card;
use crate::matchmaking::card::FightCard;
use crate::rankings::{pound_for_pound, rerank, P4PEntry};
use crate::roster::generation::generate_roster;
use crate::roster::store::{FighterDelta, Roster};

/// A promoting organization
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,
    pub short_name: String,
    /// Completed events
    pub event_count: u32,
}

impl Organization {
    pub fn new(id: OrganizationId, name: impl Into<String>, short_name: impl Into<String>) -> Self {
        Self { id, name: name.into(), short_name: short_name.into(), event_count: 0 }
    }

    pub fn from_config<R: Rng + ?Sized>(config: &OrganizationConfig, rng: &mut R) -> Self {
        Self::new(OrganizationId::from_rng(rng), &config.name, &config.short_name)
    }

    /// Short name when set, otherwise the full name
    pub fn display_prefix(&self) -> &str {
        if self.short_name.is_empty() {
            &self.name
        } else {
            &self.short_name
        }
    }

    pub fn next_event_number(&self) -> u32 {
        self.event_count + 1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Scheduled,
    Completed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub organization_id: OrganizationId,
    pub event_number: u32,
    pub name: String,
    pub card: FightCard,
    pub status: EventStatus,
}

/// Tallies for one event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventStats {
    pub fights: u32,
    pub knockouts: u32,
    pub submissions: u32,
    pub decisions: u32,
    pub title_fights: u32,
    pub title_changes: u32,
}

impl EventStats {
    fn count(&mut self, result: &FightResult, change: TitleChange) {
        self.fights += 1;
        match result.method.category() {
            MethodCategory::Knockout => self.knockouts += 1,
            MethodCategory::Submission => self.submissions += 1,
            MethodCategory::Decision => self.decisions += 1,
        }
        if result.is_title {
            self.title_fights += 1;
        }
        if matches!(change, TitleChange::NewChampion | TitleChange::Crowned) {
            self.title_changes += 1;
        }
    }

    pub fn finishes(&self) -> u32 {
        self.knockouts + self.submissions
    }
}

/// Everything produced by running one event, ready to commit
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EventOutcome {
    pub event: Event,
    pub results: Vec<FightResult>,
    pub deltas: Vec<FighterDelta>,
    pub p4p: Vec<P4PEntry>,
    pub stats: EventStats,
}

/// "{prefix} {n}" or "{prefix} {n}: {last} vs {last}", numbered for rematches
fn event_name(
    org: &Organization,
    event_number: u32,
    card: &FightCard,
    roster: &Roster,
    history: &FightHistory,
) -> String {
    let base = format!("{} {}", org.display_prefix(), event_number);
    let Some(main) = card.main_event() else {
        return base;
    };
    let (Some(a), Some(b)) = (roster.get(main.first), roster.get(main.second)) else {
        return base;
    };
    let meeting = history.bouts_between(a.id, b.id) + 1;
    if meeting > 1 {
        format!("{}: {} vs {} {}", base, a.last_name(), b.last_name(), meeting)
    } else {
        format!("{}: {} vs {}", base, a.last_name(), b.last_name())
    }
}

/// Book the organization's next event
pub fn schedule_event<R: Rng + ?Sized>(
    org: &Organization,
    roster: &Roster,
    history: &FightHistory,
    min_active_fighters: usize,
    rng: &mut R,
) -> Result<Event> {
    let available = roster.active_count();
    if available < min_active_fighters {
        return Err(FightNightError::InsufficientRoster {
            required: min_active_fighters,
            available,
        });
    }

    let event_number = org.next_event_number();
    let mut card = build_card(roster, event_number, rng);
    if card.is_empty() {
        return Err(FightNightError::EmptyCard);
    }

    let id = EventId::from_rng(rng);
    card.assign_event(id);
    let name = event_name(org, event_number, &card, roster, history);
    tracing::debug!("Scheduled {} with {} fights", name, card.len());

    Ok(Event {
        id,
        organization_id: org.id,
        event_number,
        name,
        card,
        status: EventStatus::Scheduled,
    })
}

/// Fight every bout on the card against a staged copy of the roster
pub fn run_event<R: Rng + ?Sized>(
    mut event: Event,
    roster: &Roster,
    rng: &mut R,
) -> Result<EventOutcome> {
    let mut staged = roster.clone();
    let mut results = Vec::with_capacity(event.card.len());
    let mut stats = EventStats::default();

    for fight_id in event.card.running_order() {
        let Some(fight) = event.card.get_mut(fight_id) else {
            continue;
        };
        if fight.is_completed() {
            return Err(FightNightError::FightAlreadyCompleted(fight.id));
        }

        let result = {
            let first = staged.require(fight.first)?;
            let second = staged.require(fight.second)?;
            resolve_fight(first, second, fight.is_title, rng)
        };
        let change = apply_result(&mut staged, fight, &result)?;
        stats.count(&result, change);
        fight.complete(result.clone())?;
        results.push(result);
    }

    rerank(&mut staged)?;
    staged.validate()?;

    let deltas = roster.diff(&staged);
    let p4p = pound_for_pound(staged.fighters());
    event.status = EventStatus::Completed;

    tracing::info!(
        "{}: {} fights, {} finishes, {} title fights",
        event.name,
        stats.fights,
        stats.finishes(),
        stats.title_fights
    );

    Ok(EventOutcome { event, results, deltas, p4p, stats })
}

/// Commit an outcome: apply deltas as one unit, log bouts, advance the count
pub fn commit_event(
    org: &mut Organization,
    roster: &mut Roster,
    history: &mut FightHistory,
    outcome: &EventOutcome,
) -> Result<()> {
    roster.apply_deltas(&outcome.deltas)?;
    for fight in &outcome.event.card.fights {
        history.record(outcome.event.id, outcome.event.event_number, fight);
    }
    org.event_count = org.event_count.max(outcome.event.event_number);
    Ok(())
}

/// Run a full season from a config
pub fn simulate_season(config: &SimulationConfig) -> Result<SeasonOutput> {
    config.validate()?;
    let start = std::time::Instant::now();
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    let mut roster = generate_roster(config.fighters_per_division, &mut rng)?;
    let mut org = Organization::from_config(&config.organization, &mut rng);
    let mut history = FightHistory::new();
    let mut reports = Vec::with_capacity(config.events as usize);
    let mut last_p4p = Vec::new();

    for _ in 0..config.events {
        let event = schedule_event(&org, &roster, &history, config.min_active_fighters, &mut rng)?;
        let outcome = run_event(event, &roster, &mut rng)?;
        commit_event(&mut org, &mut roster, &mut history, &outcome)?;
        reports.push(EventReport::from_outcome(&outcome, &roster));
        last_p4p = outcome.p4p;
    }

    Ok(SeasonOutput::new(org, roster, history, reports, last_p4p, start.elapsed()))
}
