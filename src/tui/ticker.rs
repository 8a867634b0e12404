use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// The match clock's one-second tick, owned as an explicit resource.
///
/// `start` spawns a task that sends one unit per second on the given
/// channel; `stop` aborts it. Acquire/release are tied to the run loop's
/// lifetime: release is idempotent, a second acquire without a release is
/// refused, and dropping the ticker releases it.
#[derive(Debug, Default)]
pub struct Ticker {
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    pub fn start(&mut self, tx: mpsc::Sender<()>) {
        if self.handle.is_some() {
            debug!("ticker already active, ignoring start");
            return;
        }
        self.handle = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            // The first interval tick completes immediately; skip it so the
            // first clock tick lands a full second after the half starts.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(()).await.is_err() {
                    break;
                }
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::advance;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_second() {
        let (tx, mut rx) = mpsc::channel(16);
        let mut ticker = Ticker::new();
        ticker.start(tx);
        // Let the spawned task register its interval before advancing the
        // paused clock.
        tokio::task::yield_now().await;

        advance(Duration::from_millis(3_100)).await;
        // `advance` wakes the timers but returns to this task first; yield so
        // the ticker task can process the elapsed ticks.
        tokio::task::yield_now().await;
        let mut ticks = 0;
        while rx.try_recv().is_ok() {
            ticks += 1;
        }
        assert_eq!(ticks, 3);
        ticker.stop();
    }

    #[tokio::test]
    async fn test_stop_is_idempotent() {
        let (tx, _rx) = mpsc::channel(16);
        let mut ticker = Ticker::new();
        ticker.stop(); // release with nothing held
        ticker.start(tx);
        assert!(ticker.is_active());
        ticker.stop();
        ticker.stop();
        assert!(!ticker.is_active());
    }

    #[tokio::test]
    async fn test_double_start_is_refused() {
        let (tx, _rx) = mpsc::channel(16);
        let mut ticker = Ticker::new();
        ticker.start(tx.clone());
        let first = ticker.handle.as_ref().map(|h| h.id());
        ticker.start(tx);
        assert_eq!(ticker.handle.as_ref().map(|h| h.id()), first);
        ticker.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_task_exits_when_receiver_drops() {
        let (tx, rx) = mpsc::channel(1);
        let mut ticker = Ticker::new();
        ticker.start(tx);
        drop(rx);
        advance(Duration::from_secs(2)).await;
        // The loop saw the closed channel and returned; nothing to assert
        // beyond "stop still works".
        ticker.stop();
    }
}
