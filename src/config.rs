//! Session configuration loaded from TOML.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::error::TeamsError;
use crate::teams::{DuplicatePolicy, Team};

/// Configuration for a team-splitting session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TeamsConfig {
    /// Display label for team 1.
    #[serde(default = "default_team_one_label")]
    team_one_label: String,

    /// Display label for team 2.
    #[serde(default = "default_team_two_label")]
    team_two_label: String,

    /// Whether a name already on the roster may be added again.
    #[serde(default)]
    duplicate_policy: DuplicatePolicy,

    /// Whether adding a participant clears the last generated teams.
    #[serde(default = "default_reset_on_add")]
    reset_on_add: bool,

    /// Fixed RNG seed for reproducible splits.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_team_one_label() -> String {
    Team::One.label().to_string()
}

#[instrument]
fn default_team_two_label() -> String {
    Team::Two.label().to_string()
}

#[instrument]
fn default_reset_on_add() -> bool {
    true
}

impl Default for TeamsConfig {
    fn default() -> Self {
        Self {
            team_one_label: default_team_one_label(),
            team_two_label: default_team_two_label(),
            duplicate_policy: DuplicatePolicy::default(),
            reset_on_add: default_reset_on_add(),
            seed: None,
        }
    }
}

impl TeamsConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TeamsError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        info!(
            duplicate_policy = ?config.duplicate_policy,
            reset_on_add = config.reset_on_add,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads configuration from `path`, or defaults when the file is absent.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, TeamsError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the seed when one is given.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Sets the duplicate policy.
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Sets whether adding a participant clears the last generated teams.
    pub fn with_reset_on_add(mut self, reset_on_add: bool) -> Self {
        self.reset_on_add = reset_on_add;
        self
    }

    /// Display label for `team`.
    pub fn label(&self, team: Team) -> &str {
        match team {
            Team::One => &self.team_one_label,
            Team::Two => &self.team_two_label,
        }
    }
}
