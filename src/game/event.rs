use serde::{Deserialize, Serialize};

use super::phase::GamePhase;

/// Reserved player id meaning "skip crediting". Credit events carrying this
/// id must be excluded from any displayed attribution.
pub const SKIP_PLAYER_ID: &str = "0";

/// Kind of a recorded match occurrence.
///
/// Wire names are the original scoreboard's strings (`GOAL_US`, ...), so an
/// exported log stays readable next to old exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    PhaseStart,
    PhaseEnd,
    GoalUs,
    GoalThem,
    CreditGoal,
    CreditAssist,
}

impl EventKind {
    /// Whether an event of this kind may be removed by undo.
    ///
    /// Goals and credits can be taken back; phase boundaries are permanent
    /// once recorded.
    pub fn is_undoable(self) -> bool {
        matches!(
            self,
            EventKind::GoalUs
                | EventKind::GoalThem
                | EventKind::CreditGoal
                | EventKind::CreditAssist
        )
    }
}

/// A single entry in the match event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Elapsed match seconds when the event was recorded.
    pub seconds: u32,
    /// Phase at recording time. For `PhaseStart` this is the phase being
    /// entered; for `PhaseEnd` the phase being exited.
    pub phase: GamePhase,
    #[serde(rename = "type")]
    pub kind: EventKind,
    /// Credited player for `CreditGoal`/`CreditAssist`; `"0"` means skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<String>,
}

impl GameEvent {
    pub fn new(seconds: u32, phase: GamePhase, kind: EventKind) -> Self {
        Self {
            seconds,
            phase,
            kind,
            player_id: None,
        }
    }

    pub fn with_player(seconds: u32, phase: GamePhase, kind: EventKind, player_id: String) -> Self {
        Self {
            seconds,
            phase,
            kind,
            player_id: Some(player_id),
        }
    }

    pub fn is_undoable(&self) -> bool {
        self.kind.is_undoable()
    }

    /// Credited player id, with the skip sentinel filtered out.
    pub fn credited_player(&self) -> Option<&str> {
        match self.player_id.as_deref() {
            Some(SKIP_PLAYER_ID) | None => None,
            Some(id) => Some(id),
        }
    }
}
