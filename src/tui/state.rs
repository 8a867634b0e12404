use crate::config::Config;
use crate::game::Game;
use crate::roster::{Player, RosterStore};

/// Top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Match,
    Roster,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::Match => "Match",
            Tab::Roster => "Roster",
        }
    }

    pub fn next(self) -> Tab {
        match self {
            Tab::Match => Tab::Roster,
            Tab::Roster => Tab::Match,
        }
    }
}

/// One-line notice for the status bar.
#[derive(Debug, Clone)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

#[derive(Debug, Default)]
pub struct UiState {
    pub tab: Tab,
    /// Selected row in the roster list.
    pub roster_selected: usize,
    /// `Some` while a new player name is being typed.
    pub name_entry: Option<String>,
    /// Quit was requested while a half is in progress; waiting for y/n.
    pub confirm_quit: bool,
    pub status: Option<StatusLine>,
}

/// Root application state - single source of truth, mutated only by the
/// reducer.
#[derive(Debug)]
pub struct AppState {
    pub game: Game,
    pub roster: Vec<Player>,
    pub store: RosterStore,
    pub config: Config,
    pub ui: UiState,
}

impl AppState {
    /// State for a fresh session: roster loaded once from `store`, match at
    /// pregame.
    pub fn new(config: Config, store: RosterStore) -> Self {
        let roster = store.load();
        Self {
            game: Game::new(config.half_length_secs),
            roster,
            store,
            config,
            ui: UiState::default(),
        }
    }

    /// Whether the player-select strip applies: a credit is pending and
    /// there is a roster to credit against.
    pub fn credit_prompt_open(&self) -> bool {
        !self.roster.is_empty() && self.game.pending_credit().is_some()
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.ui.status = Some(StatusLine {
            text: text.into(),
            is_error: false,
        });
    }

    pub fn set_status_error(&mut self, text: impl Into<String>) {
        self.ui.status = Some(StatusLine {
            text: text.into(),
            is_error: true,
        });
    }
}
