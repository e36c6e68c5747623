//! Strictly Teams library - balanced two-team splits with pins
//!
//! Collect participant names, optionally pin some to a team, and split the
//! roster into two teams whose unpinned members differ in count by at most one.
//!
//! # Architecture
//!
//! - **Teams**: participant types, the roster store and the partitioner
//! - **Session**: roster plus last generated teams, driven by user actions
//! - **Config**: TOML configuration (team labels, duplicate and reset policy, seed)
//! - **TUI**: terminal front end over a session
//!
//! # Example
//!
//! ```
//! use strictly_teams::{Pin, RosterAction, TeamSession, TeamsConfig};
//!
//! # fn example() -> Result<(), strictly_teams::TeamsError> {
//! let mut session = TeamSession::new(TeamsConfig::default().with_seed(Some(7)));
//! for name in ["Ana", "Beto", "Caro", "Dani"] {
//!     session.apply(RosterAction::Add(name.to_string()))?;
//! }
//! session.apply(RosterAction::SetPin("Beto".to_string(), Pin::TeamOne))?;
//!
//! let teams = session.generate()?;
//! assert_eq!(teams.team_one().len(), 3);
//! assert_eq!(teams.team_two().len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod error;
mod session;
mod split;
mod teams;
mod tui;

// Crate-level exports - Team types
pub use teams::{
    AddOutcome, DuplicatePolicy, MIN_PARTICIPANTS, Participant, Pin, Roster, Team,
    TeamAssignment, partition,
};

// Crate-level exports - Session management
pub use session::{ActionOutcome, RosterAction, TeamSession};

// Crate-level exports - One-shot split
pub use split::{SplitFormat, format_split, split};

// Crate-level exports - Configuration
pub use config::TeamsConfig;

// Crate-level exports - Errors
pub use error::{TeamsError, TeamsErrorKind};

// Crate-level exports - Terminal UI
pub use tui::{AppCommand, ScreenTransition, StatusTone, TeamApp, command_for, draw, run_tui};
