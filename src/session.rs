//! Team session: roster plus last generated teams, driven by user actions.

use derive_getters::Getters;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument, warn};

use crate::config::TeamsConfig;
use crate::error::{TeamsError, TeamsErrorKind};
use crate::teams::{AddOutcome, MIN_PARTICIPANTS, Pin, Roster, TeamAssignment, partition};

/// A user action against the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterAction {
    /// Add a participant by name.
    Add(String),
    /// Remove every participant with this name.
    Remove(String),
    /// Set the pin of every participant with this name.
    SetPin(String, Pin),
    /// Drop the whole roster.
    Clear,
    /// Generate (or re-shuffle) the teams.
    Generate,
}

/// What an applied action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Result of an add.
    Add(AddOutcome),
    /// Number of participants removed.
    Removed(usize),
    /// Number of participants whose pin was set.
    Pinned(usize),
    /// Number of participants cleared.
    Cleared(usize),
    /// Teams were generated.
    Generated,
}

/// Session-scoped state: one roster and the last team assignment.
///
/// The assignment is dropped whenever the roster changes so a stale split is
/// never shown against a different roster.
#[derive(Debug, Getters)]
pub struct TeamSession {
    roster: Roster,
    #[getter(skip)]
    assignment: Option<TeamAssignment>,
    config: TeamsConfig,
    #[getter(skip)]
    rng: StdRng,
}

impl TeamSession {
    /// Creates an empty session.
    ///
    /// Seeds the RNG from the config when it carries a seed, from OS entropy
    /// otherwise.
    #[instrument(skip(config))]
    pub fn new(config: TeamsConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => {
                info!(seed, "Creating session with fixed seed");
                StdRng::seed_from_u64(*seed)
            }
            None => {
                info!("Creating session with entropy seed");
                StdRng::from_entropy()
            }
        };
        Self {
            roster: Roster::new(*config.duplicate_policy()),
            assignment: None,
            config,
            rng,
        }
    }

    /// Applies one action.
    ///
    /// Only [`RosterAction::Generate`] can fail.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: RosterAction) -> Result<ActionOutcome, TeamsError> {
        let outcome = match action {
            RosterAction::Add(name) => ActionOutcome::Add(self.add(&name)),
            RosterAction::Remove(name) => ActionOutcome::Removed(self.remove(&name)),
            RosterAction::SetPin(name, pin) => ActionOutcome::Pinned(self.set_pin(&name, pin)),
            RosterAction::Clear => ActionOutcome::Cleared(self.clear()),
            RosterAction::Generate => {
                self.generate()?;
                ActionOutcome::Generated
            }
        };
        Ok(outcome)
    }

    /// Adds a participant. Clears the teams when `reset_on_add` is set.
    #[instrument(skip(self, name))]
    pub fn add(&mut self, name: &str) -> AddOutcome {
        let outcome = self.roster.add(name);
        if outcome.is_added() && *self.config.reset_on_add() {
            self.reset_assignment();
        }
        outcome
    }

    /// Removes participants by name. Clears the teams if anyone was removed.
    #[instrument(skip(self))]
    pub fn remove(&mut self, name: &str) -> usize {
        let removed = self.roster.remove(name);
        if removed > 0 {
            self.reset_assignment();
        }
        removed
    }

    /// Pins participants by name. Clears the teams if anyone matched.
    #[instrument(skip(self))]
    pub fn set_pin(&mut self, name: &str, pin: Pin) -> usize {
        let matched = self.roster.set_pin(name, pin);
        if matched > 0 {
            self.reset_assignment();
        }
        matched
    }

    /// Empties the roster and the teams.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> usize {
        let removed = self.roster.clear();
        self.reset_assignment();
        removed
    }

    /// Whether the roster is large enough to split.
    pub fn can_generate(&self) -> bool {
        self.roster.len() >= MIN_PARTICIPANTS
    }

    /// Generates fresh teams from the current roster and pins.
    ///
    /// Every call recomputes from scratch; the previous split is discarded.
    #[instrument(skip(self), fields(count = self.roster.len()))]
    pub fn generate(&mut self) -> Result<&TeamAssignment, TeamsError> {
        if !self.can_generate() {
            warn!("Not enough participants to generate teams");
            return Err(TeamsError::new(TeamsErrorKind::NotEnoughParticipants {
                count: self.roster.len(),
            }));
        }

        let assignment = partition(&self.roster, &mut self.rng);
        Ok(self.assignment.insert(assignment))
    }

    /// The last generated teams, if still current.
    pub fn assignment(&self) -> Option<&TeamAssignment> {
        self.assignment.as_ref()
    }

    /// Label for the generate action: "Shuffle Teams" once teams are shown.
    pub fn generate_label(&self) -> &'static str {
        if self.assignment.is_some() {
            "Shuffle Teams"
        } else {
            "Generate Teams"
        }
    }

    fn reset_assignment(&mut self) {
        if self.assignment.take().is_some() {
            debug!("Roster changed, teams reset");
        }
    }
}
