//! One-shot split: build a roster from a name list, generate once, format.

use tracing::{info, instrument, warn};

use crate::config::TeamsConfig;
use crate::error::{TeamsError, TeamsErrorKind};
use crate::session::TeamSession;
use crate::teams::{AddOutcome, Participant, Pin, Team, TeamAssignment};

/// Output format for [`format_split`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitFormat {
    /// Label and count header per team, pinned members marked with `*`.
    #[default]
    Text,
    /// Pretty-printed `{"team_one": [...], "team_two": [...]}`.
    Json,
}

/// Splits `names` into two teams, applying `pins` first.
///
/// Blank names are skipped. A name rejected as a duplicate, or a pin naming
/// someone not on the list, is an error rather than a silent no-op.
#[instrument(skip(names, pins, config), fields(names = names.len(), pins = pins.len()))]
pub fn split(
    names: &[String],
    pins: &[(String, Pin)],
    config: &TeamsConfig,
) -> Result<TeamAssignment, TeamsError> {
    let mut session = TeamSession::new(config.clone());

    for name in names {
        if session.add(name) == AddOutcome::Duplicate {
            warn!(name = %name, "Duplicate participant in split");
            return Err(TeamsError::new(TeamsErrorKind::DuplicateParticipant(
                name.trim().to_string(),
            )));
        }
    }

    for (name, pin) in pins {
        if session.set_pin(name, *pin) == 0 {
            warn!(name = %name, "Pin names unknown participant");
            return Err(TeamsError::new(TeamsErrorKind::UnknownParticipant(
                name.clone(),
            )));
        }
    }

    let teams = session.generate()?.clone();
    info!(
        team_one = teams.team_one().len(),
        team_two = teams.team_two().len(),
        "Split complete"
    );
    Ok(teams)
}

/// Formats a split for printing. The result has no trailing newline.
#[instrument(skip(teams, config))]
pub fn format_split(
    teams: &TeamAssignment,
    config: &TeamsConfig,
    format: SplitFormat,
) -> Result<String, TeamsError> {
    match format {
        SplitFormat::Json => Ok(serde_json::to_string_pretty(teams)?),
        SplitFormat::Text => Ok([Team::One, Team::Two]
            .into_iter()
            .map(|team| format_team(config.label(team), teams.team(team)))
            .collect::<Vec<_>>()
            .join("\n\n")),
    }
}

fn format_team(label: &str, members: &[Participant]) -> String {
    let mut out = format!("{} ({})", label, members.len());
    for member in members {
        let marker = if member.pin().is_unpinned() { " " } else { "*" };
        out.push_str(&format!("\n  {} {}", marker, member.name()));
    }
    out
}
