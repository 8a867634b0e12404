use serde::{Deserialize, Serialize};

/// One segment of match time.
///
/// Transitions are strictly ordered: `Start → First → Half → Second → Full`.
/// `start` moves out of a paused phase, `stop` moves out of an in-progress
/// phase, and the only way back is an explicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    /// Pregame: nothing has happened yet.
    Start,
    /// First half running.
    First,
    /// Halftime break.
    Half,
    /// Second half running.
    Second,
    /// Fulltime: terminal, only reset leaves it.
    Full,
}

impl GamePhase {
    /// The clock is not running and `start` is legal.
    pub fn is_paused(self) -> bool {
        matches!(self, GamePhase::Start | GamePhase::Half)
    }

    /// A half is underway and `stop` is legal.
    pub fn is_in_progress(self) -> bool {
        matches!(self, GamePhase::First | GamePhase::Second)
    }

    /// Phase entered by a legal `start`, or `None` if `start` is a no-op here.
    pub fn next_on_start(self) -> Option<GamePhase> {
        match self {
            GamePhase::Start => Some(GamePhase::First),
            GamePhase::Half => Some(GamePhase::Second),
            _ => None,
        }
    }

    /// Phase entered by a legal `stop`, or `None` if `stop` is a no-op here.
    pub fn next_on_stop(self) -> Option<GamePhase> {
        match self {
            GamePhase::First => Some(GamePhase::Half),
            GamePhase::Second => Some(GamePhase::Full),
            _ => None,
        }
    }

    /// Short label for the clock panel.
    pub fn label(self) -> &'static str {
        match self {
            GamePhase::Start => "Pregame",
            GamePhase::First => "1st half",
            GamePhase::Half => "Halftime",
            GamePhase::Second => "2nd half",
            GamePhase::Full => "Fulltime",
        }
    }
}

impl Default for GamePhase {
    fn default() -> Self {
        GamePhase::Start
    }
}
