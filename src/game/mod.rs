//! Match domain core: phase state machine, wall-clock match timer,
//! append-only event log and the controller that ties them together.

pub mod clock;
pub mod controller;
pub mod event;
pub mod log;
pub mod phase;

pub use clock::MatchClock;
pub use controller::{CreditAction, Game, PrimaryAction, Team, DEFAULT_HALF_LENGTH_SECS};
pub use event::{EventKind, GameEvent, SKIP_PLAYER_ID};
pub use log::{EventLog, Score};
pub use phase::GamePhase;
