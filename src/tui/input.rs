//! Key bindings for the team screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::teams::Pin;

/// A screen-level command decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Start typing a new name.
    EnterInput,
    /// Append a character to the name being typed.
    InputChar(char),
    /// Delete the last typed character.
    InputBackspace,
    /// Add the typed name to the roster.
    SubmitInput,
    /// Leave input mode, discarding the typed name.
    CancelInput,
    /// Move the roster selection up.
    SelectPrevious,
    /// Move the roster selection down.
    SelectNext,
    /// Advance the selected participant's pin.
    CyclePin,
    /// Set the selected participant's pin.
    PinSelected(Pin),
    /// Remove the selected participant.
    RemoveSelected,
    /// Remove everyone.
    ClearRoster,
    /// Generate or re-shuffle the teams.
    Generate,
    /// Exit the application.
    Quit,
}

/// Maps a key press to a command.
///
/// In input mode every printable character goes to the name field.
pub fn command_for(key: KeyEvent, input_mode: bool) -> Option<AppCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(AppCommand::Quit);
    }

    if input_mode {
        return match key.code {
            KeyCode::Char(c) => Some(AppCommand::InputChar(c)),
            KeyCode::Backspace => Some(AppCommand::InputBackspace),
            KeyCode::Enter => Some(AppCommand::SubmitInput),
            KeyCode::Esc => Some(AppCommand::CancelInput),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Char('n') => {
            Some(AppCommand::EnterInput)
        }
        KeyCode::Up | KeyCode::Char('k') => Some(AppCommand::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => Some(AppCommand::SelectNext),
        KeyCode::Char('p') | KeyCode::Tab => Some(AppCommand::CyclePin),
        KeyCode::Char('1') => Some(AppCommand::PinSelected(Pin::TeamOne)),
        KeyCode::Char('2') => Some(AppCommand::PinSelected(Pin::TeamTwo)),
        KeyCode::Char('0') | KeyCode::Char('u') => Some(AppCommand::PinSelected(Pin::Unpinned)),
        KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => {
            Some(AppCommand::RemoveSelected)
        }
        KeyCode::Char('c') => Some(AppCommand::ClearRoster),
        KeyCode::Char('g') | KeyCode::Char(' ') | KeyCode::Enter => Some(AppCommand::Generate),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(AppCommand::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_letters_type_in_input_mode() {
        assert_eq!(
            command_for(key(KeyCode::Char('q')), true),
            Some(AppCommand::InputChar('q'))
        );
        assert_eq!(
            command_for(key(KeyCode::Char(' ')), true),
            Some(AppCommand::InputChar(' '))
        );
    }

    #[test]
    fn test_letters_are_commands_outside_input_mode() {
        assert_eq!(command_for(key(KeyCode::Char('q')), false), Some(AppCommand::Quit));
        assert_eq!(
            command_for(key(KeyCode::Char('2')), false),
            Some(AppCommand::PinSelected(Pin::TeamTwo))
        );
        assert_eq!(command_for(key(KeyCode::Char('g')), false), Some(AppCommand::Generate));
        assert_eq!(command_for(key(KeyCode::F(5)), false), None);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for(ctrl_c, true), Some(AppCommand::Quit));
        assert_eq!(command_for(ctrl_c, false), Some(AppCommand::Quit));
    }
}
