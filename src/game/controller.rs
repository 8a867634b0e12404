use std::time::Instant;

use tracing::debug;

use super::clock::MatchClock;
use super::event::{EventKind, GameEvent};
use super::log::{EventLog, Score};
use super::phase::GamePhase;

/// Default half length: 25 minutes, the usual small-sided match.
pub const DEFAULT_HALF_LENGTH_SECS: u32 = 1500;

/// Which side scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Us,
    Them,
}

/// What a player is being credited for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditAction {
    Goal,
    Assist,
}

/// What the primary action key should do right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryAction {
    Start,
    Reset,
}

/// The match controller: phase machine, clock and event log in one place.
///
/// Every command is a guarded idempotent no-op when illegal in the current
/// state; nothing here returns an error. Callers that need to react to a
/// transition (the TUI acquiring or releasing the ticker) get a bool back.
#[derive(Debug, Clone)]
pub struct Game {
    phase: GamePhase,
    clock: MatchClock,
    log: EventLog,
    half_length_secs: u32,
    pending_reset: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(DEFAULT_HALF_LENGTH_SECS)
    }
}

impl Game {
    pub fn new(half_length_secs: u32) -> Self {
        Self {
            phase: GamePhase::Start,
            clock: MatchClock::new(),
            log: EventLog::new(),
            // A zero half length would make every tick an auto-stop.
            half_length_secs: half_length_secs.max(1),
            pending_reset: false,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn half_length_secs(&self) -> u32 {
        self.half_length_secs
    }

    pub fn reset_pending(&self) -> bool {
        self.pending_reset
    }

    pub fn elapsed_at(&self, now: Instant) -> u32 {
        self.clock.elapsed_at(now)
    }

    pub fn score(&self) -> Score {
        self.log.score()
    }

    /// Begin the next half. Legal only from a paused phase; records a
    /// `PhaseStart` tagged with the phase being entered, at the seconds
    /// shown on the (still frozen) clock. Returns whether a half started.
    pub fn start(&mut self, now: Instant) -> bool {
        let next = match self.phase.next_on_start() {
            Some(next) => next,
            None => {
                debug!(phase = ?self.phase, "start ignored: not a paused phase");
                return false;
            }
        };
        // Record with the pre-start display value; the clock jumps to the
        // second-half offset only after this event.
        let seconds = self.clock.elapsed_at(now);
        let offset = if next == GamePhase::Second {
            self.half_length_secs
        } else {
            0
        };
        self.clock.start(now, offset);
        self.phase = next;
        self.log.append(GameEvent::new(seconds, next, EventKind::PhaseStart));
        true
    }

    /// End the current half. Legal only from an in-progress phase; records a
    /// `PhaseEnd` tagged with the phase being exited. Returns whether a half
    /// ended.
    pub fn stop(&mut self, now: Instant) -> bool {
        let exited = self.phase;
        let next = match exited.next_on_stop() {
            Some(next) => next,
            None => {
                debug!(phase = ?exited, "stop ignored: no half in progress");
                return false;
            }
        };
        self.clock.stop(now);
        self.phase = next;
        self.log
            .append(GameEvent::new(self.clock.elapsed_at(now), exited, EventKind::PhaseEnd));
        true
    }

    /// Advance the clock. When elapsed time reaches an exact non-zero
    /// multiple of the half length, the half ends automatically. Returns
    /// whether that happened (the only feedback path from clock to phases).
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.phase.is_in_progress() {
            return false;
        }
        let seconds = self.clock.elapsed_at(now);
        if seconds != 0 && seconds % self.half_length_secs == 0 {
            return self.stop(now);
        }
        false
    }

    /// Back to pregame: phase `Start`, clock zeroed, log emptied. No-op when
    /// already at `Start`. Returns whether anything was cleared.
    pub fn reset(&mut self) -> bool {
        self.pending_reset = false;
        if self.phase == GamePhase::Start {
            debug!("reset ignored: already at pregame");
            return false;
        }
        self.phase = GamePhase::Start;
        self.clock.reset();
        self.log.clear();
        true
    }

    /// First step of the two-step reset. Immediate at `Full` (the match is
    /// over, nothing to lose); a no-op at `Start`. Returns whether a reset
    /// actually happened.
    pub fn request_reset(&mut self) -> bool {
        match self.phase {
            GamePhase::Full => self.reset(),
            GamePhase::Start => {
                debug!("reset request ignored: already at pregame");
                false
            }
            _ => {
                self.pending_reset = true;
                false
            }
        }
    }

    /// Second step of the two-step reset. Returns whether a reset happened.
    pub fn confirm_reset(&mut self) -> bool {
        if !self.pending_reset {
            debug!("reset confirm ignored: no reset pending");
            return false;
        }
        self.reset()
    }

    pub fn cancel_reset(&mut self) {
        self.pending_reset = false;
    }

    /// Record a goal at the current elapsed seconds. Legal only while a half
    /// is in progress; with a non-empty roster, also refused while the last
    /// goal is still awaiting credit (`GoalUs`/`CreditGoal` unresolved).
    ///
    /// With an empty roster there is nothing to credit, so consecutive goals
    /// are allowed back to back.
    pub fn mark_goal(&mut self, team: Team, now: Instant, have_roster: bool) -> bool {
        if !self.phase.is_in_progress() {
            debug!(phase = ?self.phase, "goal ignored: no half in progress");
            return false;
        }
        if have_roster {
            if let Some(last) = self.log.last() {
                if matches!(last.kind, EventKind::GoalUs | EventKind::CreditGoal) {
                    debug!("goal ignored: previous goal still awaiting credit");
                    return false;
                }
            }
        }
        let kind = match team {
            Team::Us => EventKind::GoalUs,
            Team::Them => EventKind::GoalThem,
        };
        self.log
            .append(GameEvent::new(self.clock.elapsed_at(now), self.phase, kind));
        true
    }

    /// Credit the pending goal (or its assist) to `player_id`. Gated
    /// strictly on the immediately preceding event: a goal credit must
    /// follow `GoalUs`, an assist credit must follow `CreditGoal`. The
    /// recorded seconds are copied from the event being credited.
    pub fn credit_player(&mut self, action: CreditAction, player_id: String) -> bool {
        let last = match self.log.last() {
            Some(last) => last,
            None => {
                debug!("credit ignored: empty log");
                return false;
            }
        };
        let legal = matches!(
            (action, last.kind),
            (CreditAction::Goal, EventKind::GoalUs)
                | (CreditAction::Assist, EventKind::CreditGoal)
        );
        if !legal {
            debug!(?action, last = ?last.kind, "credit ignored: out of sequence");
            return false;
        }
        let kind = match action {
            CreditAction::Goal => EventKind::CreditGoal,
            CreditAction::Assist => EventKind::CreditAssist,
        };
        let event = GameEvent::with_player(last.seconds, self.phase, kind, player_id);
        self.log.append(event);
        true
    }

    /// Take back the most recent goal or credit. Phase boundaries are
    /// permanent. Returns whether anything was removed.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            debug!("undo ignored: last event not undoable");
            return false;
        }
        self.log.undo_last()
    }

    pub fn can_undo(&self) -> bool {
        self.log.last().map(GameEvent::is_undoable).unwrap_or(false)
    }

    /// Which credit, if any, the last event is waiting for. Drives the
    /// player-select strip; the view additionally requires a non-empty
    /// roster.
    pub fn pending_credit(&self) -> Option<CreditAction> {
        match self.log.last().map(|e| e.kind) {
            Some(EventKind::GoalUs) => Some(CreditAction::Goal),
            Some(EventKind::CreditGoal) => Some(CreditAction::Assist),
            _ => None,
        }
    }

    /// What the primary action key does in the current phase.
    pub fn primary_action(&self) -> Option<PrimaryAction> {
        if self.phase.is_paused() {
            Some(PrimaryAction::Start)
        } else if self.phase == GamePhase::Full {
            Some(PrimaryAction::Reset)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn at(t0: Instant, secs: u64) -> Instant {
        t0 + Duration::from_secs(secs)
    }

    #[test]
    fn test_start_only_from_paused_phases() {
        let t0 = Instant::now();
        let mut game = Game::default();

        assert!(game.start(t0));
        assert_eq!(game.phase(), GamePhase::First);
        assert_eq!(game.log().len(), 1);

        // Already in progress: no-op, nothing appended.
        assert!(!game.start(at(t0, 1)));
        assert_eq!(game.phase(), GamePhase::First);
        assert_eq!(game.log().len(), 1);
    }

    #[test]
    fn test_phase_start_tagged_with_entered_phase() {
        let t0 = Instant::now();
        let mut game = Game::default();
        game.start(t0);
        let event = game.log().last().unwrap();
        assert_eq!(event.kind, EventKind::PhaseStart);
        assert_eq!(event.phase, GamePhase::First);
        assert_eq!(event.seconds, 0);
    }

    #[test]
    fn test_stop_tagged_with_exited_phase() {
        let t0 = Instant::now();
        let mut game = Game::default();
        game.start(t0);
        assert!(game.stop(at(t0, 90)));
        assert_eq!(game.phase(), GamePhase::Half);
        let event = game.log().last().unwrap();
        assert_eq!(event.kind, EventKind::PhaseEnd);
        assert_eq!(event.phase, GamePhase::First);
        assert_eq!(event.seconds, 90);

        // Stop while paused: no-op.
        assert!(!game.stop(at(t0, 91)));
        assert_eq!(game.log().len(), 2);
    }

    #[test]
    fn test_second_half_continues_from_offset() {
        let t0 = Instant::now();
        let mut game = Game::default();
        game.start(t0);
        game.stop(at(t0, 90));
        let restarted = at(t0, 120);
        game.start(restarted);
        assert_eq!(game.phase(), GamePhase::Second);
        // The phase-start event keeps the frozen pre-start seconds...
        assert_eq!(game.log().last().unwrap().seconds, 90);
        // ...while the running clock resumes from one half-length.
        assert_eq!(game.elapsed_at(at(t0, 150)), 1530);
    }

    #[test]
    fn test_auto_stop_at_half_length_multiple() {
        let t0 = Instant::now();
        let mut game = Game::new(300);
        game.start(t0);
        assert!(!game.tick(at(t0, 299)));
        assert!(game.tick(at(t0, 300)));
        assert_eq!(game.phase(), GamePhase::Half);

        game.start(at(t0, 400));
        assert!(!game.tick(at(t0, 401)));
        assert!(game.tick(at(t0, 700))); // elapsed 600 = 2 * 300
        assert_eq!(game.phase(), GamePhase::Full);
    }

    #[test]
    fn test_tick_is_noop_while_paused() {
        let t0 = Instant::now();
        let mut game = Game::new(300);
        assert!(!game.tick(at(t0, 300)));
        assert_eq!(game.phase(), GamePhase::Start);
    }

    #[test]
    fn test_reset_clears_everything_except_from_start() {
        let t0 = Instant::now();
        let mut game = Game::default();
        assert!(!game.reset());

        game.start(t0);
        game.mark_goal(Team::Us, at(t0, 5), false);
        assert!(game.reset());
        assert_eq!(game.phase(), GamePhase::Start);
        assert!(game.log().is_empty());
        assert_eq!(game.elapsed_at(at(t0, 999)), 0);
    }

    #[test]
    fn test_two_step_reset() {
        let t0 = Instant::now();
        let mut game = Game::default();
        game.start(t0);

        assert!(!game.request_reset());
        assert!(game.reset_pending());
        game.cancel_reset();
        assert!(!game.reset_pending());
        assert_eq!(game.phase(), GamePhase::First);

        assert!(!game.request_reset());
        assert!(game.confirm_reset());
        assert_eq!(game.phase(), GamePhase::Start);
    }

    #[test]
    fn test_reset_is_immediate_at_fulltime() {
        let t0 = Instant::now();
        let mut game = Game::new(10);
        game.start(t0);
        game.tick(at(t0, 10));
        game.start(at(t0, 11));
        game.tick(at(t0, 21)); // elapsed 20 = fulltime
        assert_eq!(game.phase(), GamePhase::Full);

        assert!(game.request_reset());
        assert_eq!(game.phase(), GamePhase::Start);
        assert!(!game.reset_pending());
    }

    #[test]
    fn test_mark_goal_requires_half_in_progress() {
        let t0 = Instant::now();
        let mut game = Game::default();
        assert!(!game.mark_goal(Team::Us, t0, false));
        game.start(t0);
        assert!(game.mark_goal(Team::Us, at(t0, 12), false));
        let event = game.log().last().unwrap();
        assert_eq!(event.kind, EventKind::GoalUs);
        assert_eq!(event.seconds, 12);
    }

    #[test]
    fn test_mark_goal_blocked_while_credit_pending_with_roster() {
        let t0 = Instant::now();
        let mut game = Game::default();
        game.start(t0);
        assert!(game.mark_goal(Team::Us, at(t0, 10), true));
        // Unresolved GoalUs blocks the next goal while a roster exists.
        assert!(!game.mark_goal(Team::Us, at(t0, 11), true));
        assert!(game.credit_player(CreditAction::Goal, "2".to_string()));
        // Unresolved CreditGoal still blocks.
        assert!(!game.mark_goal(Team::Them, at(t0, 12), true));
        assert!(game.credit_player(CreditAction::Assist, "3".to_string()));
        assert!(game.mark_goal(Team::Them, at(t0, 13), true));
    }

    #[test]
    fn test_mark_goal_double_allowed_without_roster() {
        let t0 = Instant::now();
        let mut game = Game::default();
        game.start(t0);
        assert!(game.mark_goal(Team::Us, at(t0, 10), false));
        assert!(game.mark_goal(Team::Us, at(t0, 10), false));
        assert_eq!(game.score(), (2, 0));
    }

    #[test]
    fn test_credit_sequencing() {
        let t0 = Instant::now();
        let mut game = Game::default();
        game.start(t0);

        // Nothing to credit yet.
        assert!(!game.credit_player(CreditAction::Goal, "1".to_string()));

        game.mark_goal(Team::Us, at(t0, 30), true);
        // Assist before goal credit: out of sequence.
        assert!(!game.credit_player(CreditAction::Assist, "1".to_string()));
        assert!(game.credit_player(CreditAction::Goal, "1".to_string()));
        // Goal credit twice: out of sequence.
        assert!(!game.credit_player(CreditAction::Goal, "2".to_string()));
        assert!(game.credit_player(CreditAction::Assist, "2".to_string()));

        // Credits copy the goal's recorded seconds.
        let seconds: Vec<u32> = game.log().iter().map(|e| e.seconds).collect();
        assert_eq!(seconds, vec![0, 30, 30, 30]);
    }

    #[test]
    fn test_credit_after_goal_them_is_noop() {
        let t0 = Instant::now();
        let mut game = Game::default();
        game.start(t0);
        game.mark_goal(Team::Them, at(t0, 5), true);
        assert!(!game.credit_player(CreditAction::Goal, "1".to_string()));
    }

    #[test]
    fn test_undo_respects_undoable_set() {
        let t0 = Instant::now();
        let mut game = Game::default();
        game.start(t0);
        // Last event is PhaseStart: not undoable.
        assert!(!game.undo());

        game.mark_goal(Team::Them, at(t0, 20), false);
        assert!(game.can_undo());
        assert!(game.undo());
        assert_eq!(game.score(), (0, 0));
        assert!(!game.undo());
    }

    #[test]
    fn test_pending_credit_follows_last_event() {
        let t0 = Instant::now();
        let mut game = Game::default();
        assert_eq!(game.pending_credit(), None);
        game.start(t0);
        assert_eq!(game.pending_credit(), None);
        game.mark_goal(Team::Us, at(t0, 10), true);
        assert_eq!(game.pending_credit(), Some(CreditAction::Goal));
        game.credit_player(CreditAction::Goal, "1".to_string());
        assert_eq!(game.pending_credit(), Some(CreditAction::Assist));
        game.credit_player(CreditAction::Assist, "0".to_string());
        assert_eq!(game.pending_credit(), None);
    }

    #[test]
    fn test_primary_action_table() {
        let t0 = Instant::now();
        let mut game = Game::new(10);
        assert_eq!(game.primary_action(), Some(PrimaryAction::Start));
        game.start(t0);
        assert_eq!(game.primary_action(), None);
        game.stop(at(t0, 5));
        assert_eq!(game.primary_action(), Some(PrimaryAction::Start));
        game.start(at(t0, 6));
        game.stop(at(t0, 7));
        assert_eq!(game.phase(), GamePhase::Full);
        assert_eq!(game.primary_action(), Some(PrimaryAction::Reset));
    }
}
