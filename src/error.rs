//! Error types for roster and team operations.

use derive_more::{Display, Error};
use tracing::instrument;

use crate::teams::MIN_PARTICIPANTS;

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum TeamsErrorKind {
    /// Generation needs at least two participants.
    #[display(
        "need at least {} participants to generate teams, have {}",
        MIN_PARTICIPANTS,
        count
    )]
    NotEnoughParticipants {
        /// Roster size at the time of the request.
        count: usize,
    },
    /// A pin value could not be parsed.
    #[display("invalid pin '{_0}': expected 0, 1, 2, unpinned, team1 or team2")]
    InvalidPin(String),
    /// A name was given twice where names must be unique.
    #[display("'{_0}' is listed more than once")]
    DuplicateParticipant(String),
    /// A name does not match anyone on the roster.
    #[display("'{_0}' is not among the participants")]
    UnknownParticipant(String),
    /// Output could not be serialized.
    #[display("serialize: {_0}")]
    Serialize(String),
    /// Configuration could not be parsed.
    #[display("config: {_0}")]
    Config(String),
    /// Filesystem access failed.
    #[display("io: {_0}")]
    Io(String),
}

/// Teams error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Teams error: {} at {}:{}", kind, file, line)]
pub struct TeamsError {
    /// Error kind.
    pub kind: TeamsErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl TeamsError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument(skip(kind))]
    pub fn new(kind: TeamsErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &TeamsErrorKind {
        &self.kind
    }
}

impl From<std::io::Error> for TeamsError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(TeamsErrorKind::Io(err.to_string()))
    }
}

impl From<toml::de::Error> for TeamsError {
    #[track_caller]
    fn from(err: toml::de::Error) -> Self {
        Self::new(TeamsErrorKind::Config(err.to_string()))
    }
}

impl From<serde_json::Error> for TeamsError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(TeamsErrorKind::Serialize(err.to_string()))
    }
}
