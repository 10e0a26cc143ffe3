//! Keybinding definitions for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Which surface currently receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    Dialog,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    ToggleRow,
    TogglePage,
    ClearSelection,
    OpenBulkSelect,
    Refresh,
    OpenHelp,
    Digit(u8),
    Backspace,
    Increment,
    Decrement,
    Confirm,
    Cancel,
}

pub fn map_key(event: KeyEvent, mode: InputMode) -> Option<Action> {
    let KeyEvent {
        code,
        modifiers,
        kind,
        ..
    } = event;

    if kind == KeyEventKind::Release {
        return None;
    }

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') if mode == InputMode::Browse => Some(Action::Refresh),
            _ => None,
        };
    }

    match mode {
        InputMode::Browse => map_browse(code),
        InputMode::Dialog => map_dialog(code),
        InputMode::Help => match code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q') => {
                Some(Action::Cancel)
            }
            _ => None,
        },
    }
}

fn map_browse(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::OpenHelp),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => Some(Action::PrevPage),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => Some(Action::NextPage),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::FirstPage),
        KeyCode::End | KeyCode::Char('G') => Some(Action::LastPage),
        KeyCode::Char(' ') => Some(Action::ToggleRow),
        KeyCode::Char('a') => Some(Action::TogglePage),
        KeyCode::Char('c') => Some(Action::ClearSelection),
        KeyCode::Char('b') => Some(Action::OpenBulkSelect),
        KeyCode::Esc => Some(Action::Cancel),
        _ => None,
    }
}

fn map_dialog(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char(c) if c.is_ascii_digit() => c.to_digit(10).map(|d| Action::Digit(d as u8)),
        KeyCode::Backspace | KeyCode::Delete => Some(Action::Backspace),
        KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('k') => Some(Action::Increment),
        KeyCode::Down | KeyCode::Char('-') | KeyCode::Char('j') => Some(Action::Decrement),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Cancel),
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
    fn test_digits_only_edit_in_dialog() {
        assert_eq!(
            map_key(key(KeyCode::Char('7')), InputMode::Dialog),
            Some(Action::Digit(7))
        );
        assert_eq!(map_key(key(KeyCode::Char('7')), InputMode::Browse), None);
    }

    #[test]
    fn test_q_cancels_dialog_instead_of_quitting() {
        assert_eq!(
            map_key(key(KeyCode::Char('q')), InputMode::Dialog),
            Some(Action::Cancel)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('q')), InputMode::Browse),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for mode in [InputMode::Browse, InputMode::Dialog, InputMode::Help] {
            assert_eq!(map_key(event, mode), Some(Action::Quit));
        }
    }

    #[test]
    fn test_release_events_ignored() {
        let mut event = key(KeyCode::Char('j'));
        event.kind = KeyEventKind::Release;
        assert_eq!(map_key(event, InputMode::Browse), None);
    }
}
