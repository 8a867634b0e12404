use super::event::{EventKind, GameEvent};

/// Running score derived from the event log: (us, them).
pub type Score = (u32, u32);

/// Append-only ordered record of match events.
///
/// Only the final element may ever be removed, and only when its kind is
/// undoable. There is no mid-sequence mutation; scores and history views are
/// all derived from the sequence.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Remove the last event iff the log is non-empty and that event is
    /// undoable. Returns whether anything was removed.
    pub fn undo_last(&mut self) -> bool {
        match self.events.last() {
            Some(event) if event.is_undoable() => {
                self.events.pop();
                true
            }
            _ => false,
        }
    }

    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GameEvent> {
        self.events.iter()
    }

    /// Score over the prefix ending at `index` (inclusive). Shown next to
    /// phase-end rows in the history view.
    pub fn score_at(&self, index: usize) -> Score {
        let end = (index + 1).min(self.events.len());
        count_goals(&self.events[..end])
    }

    /// Score over the whole log.
    pub fn score(&self) -> Score {
        count_goals(&self.events)
    }

    /// Forget everything. Reset only.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

fn count_goals(events: &[GameEvent]) -> Score {
    let us = events
        .iter()
        .filter(|e| e.kind == EventKind::GoalUs)
        .count() as u32;
    let them = events
        .iter()
        .filter(|e| e.kind == EventKind::GoalThem)
        .count() as u32;
    (us, them)
}
