use crossterm::event::{KeyCode, KeyEvent};
use tracing::trace;

use super::action::Action;
use super::state::{AppState, Tab};

/// Translate a key press into an action, given the current state. Open
/// prompts (quit confirmation, name entry, pending reset) capture the
/// keyboard first; anything they do not recognize is swallowed so a stray
/// key cannot reach the match underneath. Unmapped keys elsewhere are logged
/// and ignored.
pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    if state.ui.confirm_quit {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('n') | KeyCode::Esc => Some(Action::CancelPending),
            _ => None,
        };
    }

    if state.ui.name_entry.is_some() {
        return match key.code {
            KeyCode::Enter => Some(Action::InputCommit),
            KeyCode::Esc => Some(Action::CancelPending),
            KeyCode::Backspace => Some(Action::InputBackspace),
            KeyCode::Char(c) => Some(Action::InputChar(c)),
            _ => None,
        };
    }

    if state.game.reset_pending() {
        return match key.code {
            KeyCode::Char('y') => Some(Action::ConfirmReset),
            KeyCode::Char('n') | KeyCode::Esc => Some(Action::CancelPending),
            _ => None,
        };
    }

    // Global keys.
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Tab => return Some(Action::NextTab),
        _ => {}
    }

    let action = match state.ui.tab {
        Tab::Match => match key.code {
            KeyCode::Char(' ') => Some(Action::Primary),
            KeyCode::Char('u') => Some(Action::Undo),
            KeyCode::Char('g') => Some(Action::GoalUs),
            KeyCode::Char('t') => Some(Action::GoalThem),
            KeyCode::Char('r') => Some(Action::RequestReset),
            KeyCode::Char('0') if state.credit_prompt_open() => Some(Action::SkipCredit),
            KeyCode::Char(c @ '1'..='9') if state.credit_prompt_open() => {
                Some(Action::Credit(c as usize - '0' as usize))
            }
            _ => None,
        },
        Tab::Roster => match key.code {
            KeyCode::Up => Some(Action::RosterUp),
            KeyCode::Down => Some(Action::RosterDown),
            KeyCode::Char('a') => Some(Action::RosterAdd),
            KeyCode::Char('d') => Some(Action::RosterDelete),
            _ => None,
        },
    };

    if action.is_none() {
        trace!(code = ?key.code, tab = ?state.ui.tab, "unmapped key");
    }
    action
}
