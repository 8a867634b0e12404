pub mod action;
pub mod keys;
pub mod reducer;
pub mod state;
pub mod ticker;
pub mod views;


pub use action::{Action, Effect};
pub use keys::key_to_action;
pub use reducer::reduce;
pub use state::AppState;
pub use ticker::Ticker;

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

/// Buffer size for the clock tick channel.
const TICK_CHANNEL_BUFFER_SIZE: usize = 16;

/// Main entry point for TUI mode.
pub async fn run(mut state: AppState) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tick_tx, mut tick_rx) = mpsc::channel::<()>(TICK_CHANNEL_BUFFER_SIZE);
    let mut ticker = Ticker::new();

    // Main loop
    let mut quit = false;
    while !quit {
        // Apply any clock ticks that arrived since the last pass, so the
        // displayed time and the auto-stop never wait on a key press.
        while tick_rx.try_recv().is_ok() {
            let effect = reduce(&mut state, Action::Tick, Instant::now());
            quit |= apply_effect(effect, &mut ticker, &tick_tx);
        }

        terminal.draw(|f| views::draw(f, &state))?;

        // Poll for keyboard events; the timeout keeps the clock fresh.
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = key_to_action(key, &state) {
                    let effect = reduce(&mut state, action, Instant::now());
                    quit |= apply_effect(effect, &mut ticker, &tick_tx);
                }
            }
        }
    }

    ticker.stop();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Execute a reducer effect. Returns whether the loop should exit.
fn apply_effect(effect: Effect, ticker: &mut Ticker, tick_tx: &mpsc::Sender<()>) -> bool {
    match effect {
        Effect::None => false,
        Effect::StartTicker => {
            ticker.start(tick_tx.clone());
            false
        }
        Effect::StopTicker => {
            ticker.stop();
            false
        }
        Effect::Quit => true,
    }
}
