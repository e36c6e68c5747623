//! Core domain types for team splitting.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

use crate::error::{TeamsError, TeamsErrorKind};

/// One of the two teams produced by a split.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    /// The first team. Takes the extra player when the unpinned count is odd.
    One,
    /// The second team.
    Two,
}

impl Team {
    /// Default display label ("Team 1" / "Team 2").
    pub fn label(self) -> &'static str {
        match self {
            Team::One => "Team 1",
            Team::Two => "Team 2",
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Manual override forcing a participant onto a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pin {
    /// Subject to random distribution.
    #[default]
    Unpinned,
    /// Always placed on team 1.
    TeamOne,
    /// Always placed on team 2.
    TeamTwo,
}

impl Pin {
    /// The team this pin forces, if any.
    pub fn team(self) -> Option<Team> {
        match self {
            Pin::Unpinned => None,
            Pin::TeamOne => Some(Team::One),
            Pin::TeamTwo => Some(Team::Two),
        }
    }

    /// Whether the participant is left to the shuffle.
    pub fn is_unpinned(self) -> bool {
        matches!(self, Pin::Unpinned)
    }

    /// Next pin in the selector order: unpinned, team 1, team 2, unpinned.
    pub fn cycle(self) -> Self {
        match self {
            Pin::Unpinned => Pin::TeamOne,
            Pin::TeamOne => Pin::TeamTwo,
            Pin::TeamTwo => Pin::Unpinned,
        }
    }
}

impl std::fmt::Display for Pin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pin::Unpinned => write!(f, "unpinned"),
            Pin::TeamOne => write!(f, "team1"),
            Pin::TeamTwo => write!(f, "team2"),
        }
    }
}

impl FromStr for Pin {
    type Err = TeamsError;

    /// Accepts `0`/`unpinned`/`none`, `1`/`team1`, `2`/`team2` (case-insensitive).
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "0" | "unpinned" | "unpin" | "none" => Ok(Pin::Unpinned),
            "1" | "team1" | "teamone" | "one" => Ok(Pin::TeamOne),
            "2" | "team2" | "teamtwo" | "two" => Ok(Pin::TeamTwo),
            _ => Err(TeamsError::new(TeamsErrorKind::InvalidPin(s.to_string()))),
        }
    }
}

/// A named participant and their pin state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    /// Trimmed, non-empty display name. Identity key within a roster.
    name: String,
    /// Team override.
    #[serde(default)]
    pin: Pin,
}

impl Participant {
    /// Creates an unpinned participant. Callers are expected to pass a
    /// trimmed, non-empty name; [`Roster::add`](crate::Roster::add) does this.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pin: Pin::Unpinned,
        }
    }

    /// Returns the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the pin.
    pub fn pin(&self) -> Pin {
        self.pin
    }

    pub(crate) fn set_pin(&mut self, pin: Pin) {
        self.pin = pin;
    }
}
