//! Team screen state and key handling.

use crossterm::event::KeyEvent;
use ratatui::widgets::ListState;
use tracing::{debug, info, instrument};

use super::input::{AppCommand, command_for};
use crate::config::TeamsConfig;
use crate::session::{ActionOutcome, RosterAction, TeamSession};
use crate::teams::{AddOutcome, Participant, Pin};

/// The result of handling a key on the team screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Keep running.
    Stay,
    /// Exit the application cleanly.
    Quit,
}

/// Tone of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusTone {
    /// Neutral feedback.
    #[default]
    Info,
    /// Something the user asked for did not happen.
    Warning,
}

/// Terminal application state for one team session.
#[derive(Debug)]
pub struct TeamApp {
    session: TeamSession,
    list_state: ListState,
    input: String,
    input_mode: bool,
    status: String,
    status_tone: StatusTone,
}

impl TeamApp {
    /// Creates the app over a fresh session. Starts in input mode since the
    /// roster is empty.
    #[instrument(skip(config))]
    pub fn new(config: TeamsConfig) -> Self {
        info!("Creating TeamApp");
        Self {
            session: TeamSession::new(config),
            list_state: ListState::default(),
            input: String::new(),
            input_mode: true,
            status: "Type a name and press Enter".to_string(),
            status_tone: StatusTone::Info,
        }
    }

    /// The underlying session.
    pub fn session(&self) -> &TeamSession {
        &self.session
    }

    /// Roster selection state.
    pub fn list_state(&self) -> ListState {
        self.list_state
    }

    /// Name being typed.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether keys go to the name field.
    pub fn input_mode(&self) -> bool {
        self.input_mode
    }

    /// Last status message and its tone.
    pub fn status(&self) -> (&str, StatusTone) {
        (&self.status, self.status_tone)
    }

    /// The highlighted roster entry.
    pub fn selected(&self) -> Option<&Participant> {
        self.list_state
            .selected()
            .and_then(|idx| self.session.roster().get(idx))
    }

    /// Handles a key and returns the resulting transition.
    #[instrument(skip(self, key))]
    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match command_for(key, self.input_mode) {
            Some(command) => self.execute(command),
            None => ScreenTransition::Stay,
        }
    }

    /// Executes a decoded command.
    #[instrument(skip(self))]
    pub fn execute(&mut self, command: AppCommand) -> ScreenTransition {
        match command {
            AppCommand::EnterInput => {
                self.input_mode = true;
                self.set_status(StatusTone::Info, "Type a name and press Enter");
            }
            AppCommand::InputChar(c) => self.input.push(c),
            AppCommand::InputBackspace => {
                self.input.pop();
            }
            AppCommand::SubmitInput => self.submit_input(),
            AppCommand::CancelInput => {
                self.input.clear();
                self.input_mode = false;
                self.set_status(StatusTone::Info, "");
            }
            AppCommand::SelectPrevious => self.select_previous(),
            AppCommand::SelectNext => self.select_next(),
            AppCommand::CyclePin => {
                if let Some(pin) = self.selected().map(|p| p.pin().cycle()) {
                    self.pin_selected(pin);
                }
            }
            AppCommand::PinSelected(pin) => self.pin_selected(pin),
            AppCommand::RemoveSelected => self.remove_selected(),
            AppCommand::ClearRoster => {
                self.dispatch(RosterAction::Clear);
                self.list_state.select(None);
            }
            AppCommand::Generate => {
                self.dispatch(RosterAction::Generate);
            }
            AppCommand::Quit => {
                info!("Quit requested");
                return ScreenTransition::Quit;
            }
        }
        ScreenTransition::Stay
    }

    fn submit_input(&mut self) {
        let name = std::mem::take(&mut self.input);
        // Keep the newest participant highlighted.
        if self.dispatch(RosterAction::Add(name)) == Some(ActionOutcome::Add(AddOutcome::Added)) {
            self.list_state.select(Some(self.session.roster().len() - 1));
        }
    }

    fn pin_selected(&mut self, pin: Pin) {
        match self.selected().map(|p| p.name().to_string()) {
            Some(name) => {
                self.dispatch(RosterAction::SetPin(name, pin));
            }
            None => self.set_status(StatusTone::Warning, "Select a participant first"),
        }
    }

    fn remove_selected(&mut self) {
        let Some(name) = self.selected().map(|p| p.name().to_string()) else {
            self.set_status(StatusTone::Warning, "Select a participant first");
            return;
        };
        self.dispatch(RosterAction::Remove(name));

        let len = self.session.roster().len();
        let selected = match self.list_state.selected() {
            _ if len == 0 => None,
            Some(idx) => Some(idx.min(len - 1)),
            None => Some(0),
        };
        self.list_state.select(selected);
    }

    /// Sends an action to the session and reports the outcome.
    fn dispatch(&mut self, action: RosterAction) -> Option<ActionOutcome> {
        let subject = match &action {
            RosterAction::Add(name)
            | RosterAction::Remove(name)
            | RosterAction::SetPin(name, _) => name.trim().to_string(),
            RosterAction::Clear | RosterAction::Generate => String::new(),
        };
        let pin = match &action {
            RosterAction::SetPin(_, pin) => Some(*pin),
            _ => None,
        };

        match self.session.apply(action) {
            Ok(outcome) => {
                debug!(?outcome, "Action applied");
                let (tone, message) = self.describe(outcome, &subject, pin);
                self.set_status(tone, message);
                Some(outcome)
            }
            Err(e) => {
                self.set_status(StatusTone::Warning, e.kind().to_string());
                None
            }
        }
    }

    fn describe(
        &self,
        outcome: ActionOutcome,
        subject: &str,
        pin: Option<Pin>,
    ) -> (StatusTone, String) {
        let config = self.session.config();
        match outcome {
            ActionOutcome::Add(AddOutcome::Added) => (StatusTone::Info, format!("Added {}", subject)),
            ActionOutcome::Add(AddOutcome::Blank) => {
                (StatusTone::Warning, "Name cannot be empty".to_string())
            }
            ActionOutcome::Add(AddOutcome::Duplicate) => {
                (StatusTone::Warning, format!("{} is already on the roster", subject))
            }
            ActionOutcome::Removed(_) => (StatusTone::Info, format!("Removed {}", subject)),
            ActionOutcome::Pinned(_) => {
                let message = match pin.and_then(Pin::team) {
                    Some(team) => format!("Pinned {} to {}", subject, config.label(team)),
                    None => format!("Unpinned {}", subject),
                };
                (StatusTone::Info, message)
            }
            ActionOutcome::Cleared(count) => {
                (StatusTone::Info, format!("Cleared {} participants", count))
            }
            ActionOutcome::Generated => (StatusTone::Info, "Teams generated".to_string()),
        }
    }

    fn select_previous(&mut self) {
        let len = self.session.roster().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => len - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let len = self.session.roster().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn set_status(&mut self, tone: StatusTone, message: impl Into<String>) {
        self.status_tone = tone;
        self.status = message.into();
    }
}
