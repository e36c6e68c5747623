//! Team partitioner: splits a roster into two teams.
//!
//! Pins are absolute. The unpinned participants are shuffled uniformly and
//! split at `ceil(u / 2)`, so team 1 takes the extra player on an odd count.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::roster::Roster;
use super::types::{Participant, Team};

/// Two ordered team lists produced by one generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAssignment {
    team_one: Vec<Participant>,
    team_two: Vec<Participant>,
}

impl TeamAssignment {
    /// Creates an assignment from two team lists.
    pub fn new(team_one: Vec<Participant>, team_two: Vec<Participant>) -> Self {
        Self { team_one, team_two }
    }

    /// Members of the given team.
    pub fn team(&self, team: Team) -> &[Participant] {
        match team {
            Team::One => &self.team_one,
            Team::Two => &self.team_two,
        }
    }

    /// Members of team 1.
    pub fn team_one(&self) -> &[Participant] {
        &self.team_one
    }

    /// Members of team 2.
    pub fn team_two(&self) -> &[Participant] {
        &self.team_two
    }

    /// Total participants across both teams.
    pub fn len(&self) -> usize {
        self.team_one.len() + self.team_two.len()
    }

    /// Whether both teams are empty.
    pub fn is_empty(&self) -> bool {
        self.team_one.is_empty() && self.team_two.is_empty()
    }

    /// Absolute difference between team sizes.
    ///
    /// Only unpinned players are balanced, so heavy pinning can push this
    /// above one.
    pub fn imbalance(&self) -> usize {
        self.team_one.len().abs_diff(self.team_two.len())
    }
}

/// Splits the roster into two teams.
///
/// Each team lists its pinned participants first, in roster order, followed
/// by its share of the shuffled unpinned participants. The function is total:
/// rosters smaller than [`MIN_PARTICIPANTS`](super::MIN_PARTICIPANTS) are the
/// caller's concern.
#[instrument(skip(roster, rng), fields(count = roster.len()))]
pub fn partition<R: Rng + ?Sized>(roster: &Roster, rng: &mut R) -> TeamAssignment {
    let mut team_one: Vec<Participant> = roster.pinned_to(Team::One).cloned().collect();
    let mut team_two: Vec<Participant> = roster.pinned_to(Team::Two).cloned().collect();
    let mut unpinned: Vec<Participant> = roster.unpinned().cloned().collect();

    debug!(
        pinned_one = team_one.len(),
        pinned_two = team_two.len(),
        unpinned = unpinned.len(),
        "Partitioning roster"
    );

    unpinned.shuffle(rng);
    let split = unpinned.len().div_ceil(2);
    let rest = unpinned.split_off(split);
    team_one.extend(unpinned);
    team_two.extend(rest);

    info!(
        team_one = team_one.len(),
        team_two = team_two.len(),
        "Teams generated"
    );

    TeamAssignment::new(team_one, team_two)
}
