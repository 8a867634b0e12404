/// Global actions - every state change in the TUI happens through one of
/// these. Actions are produced by the key map and by the clock ticker, and
/// consumed by the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Space: start the next half, or reset once the match is over.
    Primary,
    /// One second of match clock elapsed (from the ticker channel).
    Tick,
    Undo,
    GoalUs,
    GoalThem,
    /// Credit the pending goal/assist to the 1-based roster slot.
    Credit(usize),
    /// Record the pending credit as skipped.
    SkipCredit,
    RequestReset,
    ConfirmReset,
    /// Esc: dismiss whatever prompt is open (reset, quit, name entry).
    CancelPending,

    NextTab,
    RosterUp,
    RosterDown,
    /// Begin typing a new player name.
    RosterAdd,
    RosterDelete,
    InputChar(char),
    InputBackspace,
    InputCommit,

    Quit,
}

/// Side effects the reducer asks the run loop to perform. The reducer never
/// touches the terminal or the ticker itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Acquire the one-second ticker (a half just started).
    StartTicker,
    /// Release the ticker (half ended or match reset). Idempotent.
    StopTicker,
    Quit,
}
