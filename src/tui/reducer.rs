use std::time::Instant;

use tracing::{debug, warn};

use crate::game::{PrimaryAction, Team, SKIP_PLAYER_ID};
use crate::roster::{next_id, Player};

use super::action::{Action, Effect};
use super::state::AppState;

/// State reducer. Applies one action to the state and returns the side
/// effect (if any) for the run loop to execute. Domain-rule violations are
/// already silent no-ops inside `Game`; everything surfaced here is either a
/// ticker handover or a persistence problem.
pub fn reduce(state: &mut AppState, action: Action, now: Instant) -> Effect {
    match action {
        Action::Primary => match state.game.primary_action() {
            Some(PrimaryAction::Start) => {
                if state.game.start(now) {
                    state.ui.status = None;
                    Effect::StartTicker
                } else {
                    Effect::None
                }
            }
            Some(PrimaryAction::Reset) => {
                // Fulltime: reset without the confirm step.
                if state.game.request_reset() {
                    Effect::StopTicker
                } else {
                    Effect::None
                }
            }
            None => {
                debug!("primary action ignored: half in progress");
                Effect::None
            }
        },

        Action::Tick => {
            if state.game.tick(now) {
                // The half ended on its own; give the ticker back.
                Effect::StopTicker
            } else {
                Effect::None
            }
        }

        Action::GoalUs => {
            state
                .game
                .mark_goal(Team::Us, now, !state.roster.is_empty());
            Effect::None
        }
        Action::GoalThem => {
            state
                .game
                .mark_goal(Team::Them, now, !state.roster.is_empty());
            Effect::None
        }

        Action::Credit(slot) => {
            let credit = match state.game.pending_credit() {
                Some(credit) if !state.roster.is_empty() => credit,
                _ => {
                    debug!(slot, "credit ignored: no credit pending");
                    return Effect::None;
                }
            };
            match state.roster.get(slot.wrapping_sub(1)) {
                Some(player) => {
                    let id = player.id.clone();
                    state.game.credit_player(credit, id);
                }
                None => debug!(slot, "credit ignored: no such roster slot"),
            }
            Effect::None
        }
        Action::SkipCredit => {
            if let Some(credit) = state.game.pending_credit() {
                state.game.credit_player(credit, SKIP_PLAYER_ID.to_string());
            }
            Effect::None
        }

        Action::Undo => {
            if !state.game.reset_pending() {
                state.game.undo();
            }
            Effect::None
        }

        Action::RequestReset => {
            if state.game.request_reset() {
                Effect::StopTicker
            } else {
                Effect::None
            }
        }
        Action::ConfirmReset => {
            if state.game.confirm_reset() {
                Effect::StopTicker
            } else {
                Effect::None
            }
        }
        Action::CancelPending => {
            state.game.cancel_reset();
            state.ui.confirm_quit = false;
            state.ui.name_entry = None;
            Effect::None
        }

        Action::NextTab => {
            state.ui.tab = state.ui.tab.next();
            state.ui.name_entry = None;
            Effect::None
        }

        Action::RosterUp => {
            state.ui.roster_selected = state.ui.roster_selected.saturating_sub(1);
            Effect::None
        }
        Action::RosterDown => {
            if state.ui.roster_selected + 1 < state.roster.len() {
                state.ui.roster_selected += 1;
            }
            Effect::None
        }
        Action::RosterAdd => {
            state.ui.name_entry = Some(String::new());
            Effect::None
        }
        Action::InputChar(c) => {
            if let Some(entry) = state.ui.name_entry.as_mut() {
                entry.push(c);
            }
            Effect::None
        }
        Action::InputBackspace => {
            if let Some(entry) = state.ui.name_entry.as_mut() {
                entry.pop();
            }
            Effect::None
        }
        Action::InputCommit => {
            let name = match state.ui.name_entry.take() {
                Some(name) => name.trim().to_string(),
                None => return Effect::None,
            };
            if name.is_empty() {
                return Effect::None;
            }
            let id = next_id(&state.roster);
            state.roster.push(Player { id, name });
            persist_roster(state);
            Effect::None
        }
        Action::RosterDelete => {
            let index = state.ui.roster_selected;
            if index >= state.roster.len() {
                debug!(index, "delete ignored: no such roster row");
                return Effect::None;
            }
            state.roster.remove(index);
            if state.ui.roster_selected >= state.roster.len() {
                state.ui.roster_selected = state.roster.len().saturating_sub(1);
            }
            persist_roster(state);
            Effect::None
        }

        Action::Quit => {
            // Leaving mid-half needs a second confirmation, like the
            // original's prompt-on-navigate. The prompt exists exactly while
            // a half is in progress, so it cannot be installed twice.
            if state.game.phase().is_in_progress() && !state.ui.confirm_quit {
                state.ui.confirm_quit = true;
                Effect::None
            } else {
                Effect::Quit
            }
        }
    }
}

/// Whole-list snapshot after every roster mutation. A failed write keeps the
/// in-memory roster and surfaces on the status bar.
fn persist_roster(state: &mut AppState) {
    if let Err(err) = state.store.save(&state.roster) {
        warn!(%err, "failed to save roster");
        state.set_status_error(format!("Could not save roster: {}", err));
    } else {
        state.ui.status = None;
    }
}
