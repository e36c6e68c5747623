//! Team splitting core: participants, roster store and partitioner.

mod partition;
mod roster;
mod types;

pub use partition::{TeamAssignment, partition};
pub use roster::{AddOutcome, DuplicatePolicy, Roster};
pub use types::{Participant, Pin, Team};

/// Smallest roster that can be split into teams.
pub const MIN_PARTICIPANTS: usize = 2;
