//! Character-by-character text reveal.
//!
//! The reveal runs as a spawned task ticking at a fixed interval. The first
//! character is emitted immediately, one more on each tick. Cancelling the
//! handle stops the reveal before the next character.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy)]
pub struct Typewriter {
    interval: Duration,
}

impl Typewriter {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Start revealing `text`, passing each character to `emit`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn reveal<F>(&self, text: &str, mut emit: F) -> RevealHandle
    where
        F: FnMut(char) + Send + 'static,
    {
        let token = CancellationToken::new();
        let child = token.clone();
        let chars: Vec<char> = text.chars().collect();
        let interval = self.interval;

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            for ch in chars {
                tokio::select! {
                    biased;
                    _ = child.cancelled() => return false,
                    _ = ticker.tick() => emit(ch),
                }
            }
            true
        });

        RevealHandle { token, task }
    }
}

/// Handle to a running reveal.
#[derive(Debug)]
pub struct RevealHandle {
    token: CancellationToken,
    task: JoinHandle<bool>,
}

impl RevealHandle {
    /// Stop the reveal. Characters already emitted stay emitted.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Wait for the reveal to end. Returns `true` if every character was
    /// emitted, `false` if it was cancelled.
    pub async fn finished(self) -> bool {
        self.task.await.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn collector() -> (Arc<Mutex<String>>, impl FnMut(char) + Send + 'static) {
        let out = Arc::new(Mutex::new(String::new()));
        let sink = Arc::clone(&out);
        (out, move |ch| sink.lock().unwrap().push(ch))
    }

    #[tokio::test(start_paused = true)]
    async fn reveals_every_character_in_order() {
        let (out, emit) = collector();
        let handle = Typewriter::new(Duration::from_millis(20)).reveal("Xin chào", emit);

        assert!(handle.finished().await);
        assert_eq!(out.lock().unwrap().as_str(), "Xin chào");
    }

    #[tokio::test(start_paused = true)]
    async fn reveal_takes_one_interval_per_character() {
        let (out, emit) = collector();
        let start = tokio::time::Instant::now();
        let handle = Typewriter::new(Duration::from_millis(20)).reveal("abcd", emit);

        assert!(handle.finished().await);
        // First character is immediate, the remaining three wait a tick each.
        assert_eq!(start.elapsed(), Duration::from_millis(60));
        assert_eq!(out.lock().unwrap().len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_reveal_early() {
        let (out, emit) = collector();
        let text = "x".repeat(100);
        let handle = Typewriter::new(Duration::from_millis(20)).reveal(&text, emit);

        tokio::time::sleep(Duration::from_millis(50)).await;
        handle.cancel();
        assert!(!handle.finished().await);

        let revealed = out.lock().unwrap().len();
        assert!(revealed >= 1 && revealed < 100);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_text_finishes_immediately() {
        let (out, emit) = collector();
        let handle = Typewriter::new(Duration::from_millis(20)).reveal("", emit);
        assert!(handle.finished().await);
        assert!(out.lock().unwrap().is_empty());
    }
}
