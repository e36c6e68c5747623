//! Roster store: the ordered set of participants and their pins.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::types::{Participant, Pin, Team};

/// How [`Roster::add`] treats a name that is already on the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Duplicate names are refused; the name stays a unique key.
    #[default]
    Reject,
    /// Duplicates are appended. Remove and pin then act on every match.
    Allow,
}

/// Result of an add request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The participant was appended.
    Added,
    /// Input was empty or whitespace only; nothing changed.
    Blank,
    /// Name already present under [`DuplicatePolicy::Reject`]; nothing changed.
    Duplicate,
}

impl AddOutcome {
    /// Whether the roster changed.
    pub fn is_added(self) -> bool {
        matches!(self, AddOutcome::Added)
    }
}

/// Ordered collection of participants, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    participants: Vec<Participant>,
    duplicate_policy: DuplicatePolicy,
}

impl Roster {
    /// Creates an empty roster.
    #[instrument]
    pub fn new(duplicate_policy: DuplicatePolicy) -> Self {
        Self {
            participants: Vec::new(),
            duplicate_policy,
        }
    }

    /// Adds a participant by name.
    ///
    /// The name is trimmed first. Blank input is ignored, and so is a
    /// duplicate name unless the roster allows duplicates.
    #[instrument(skip(self, name))]
    pub fn add(&mut self, name: &str) -> AddOutcome {
        let name = name.trim();
        if name.is_empty() {
            debug!("Ignoring blank participant name");
            return AddOutcome::Blank;
        }

        if self.duplicate_policy == DuplicatePolicy::Reject && self.contains(name) {
            warn!(name, "Participant already on roster");
            return AddOutcome::Duplicate;
        }

        self.participants.push(Participant::new(name));
        info!(name, count = self.participants.len(), "Participant added");
        AddOutcome::Added
    }

    /// Removes every participant with the given name.
    ///
    /// Returns how many were removed; zero means the name was not present.
    #[instrument(skip(self))]
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.participants.len();
        self.participants.retain(|p| p.name() != name);
        let removed = before - self.participants.len();

        if removed == 0 {
            debug!(name, "No participant to remove");
        } else {
            info!(name, removed, count = self.participants.len(), "Participant removed");
        }
        removed
    }

    /// Sets the pin on every participant with the given name.
    ///
    /// Returns how many participants matched.
    #[instrument(skip(self))]
    pub fn set_pin(&mut self, name: &str, pin: Pin) -> usize {
        let mut matched = 0;
        for participant in self.participants.iter_mut().filter(|p| p.name() == name) {
            participant.set_pin(pin);
            matched += 1;
        }

        if matched == 0 {
            debug!(name, "No participant to pin");
        } else {
            info!(name, %pin, matched, "Pin updated");
        }
        matched
    }

    /// Removes everyone. Returns how many were removed.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> usize {
        let removed = self.participants.len();
        self.participants.clear();
        info!(removed, "Roster cleared");
        removed
    }

    /// All participants in insertion order.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Participant at the given display index.
    pub fn get(&self, index: usize) -> Option<&Participant> {
        self.participants.get(index)
    }

    /// Number of participants.
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Whether any participant has this exact name.
    pub fn contains(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p.name() == name)
    }

    /// Participants pinned to `team`, in roster order.
    pub fn pinned_to(&self, team: Team) -> impl Iterator<Item = &Participant> {
        self.participants
            .iter()
            .filter(move |p| p.pin().team() == Some(team))
    }

    /// Participants left to the shuffle, in roster order.
    pub fn unpinned(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter().filter(|p| p.pin().is_unpinned())
    }

    /// Number of unpinned participants.
    pub fn unpinned_count(&self) -> usize {
        self.unpinned().count()
    }

    /// The duplicate policy in force.
    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicate_policy
    }
}
