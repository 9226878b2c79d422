//! Simulated progress for a pending lookup.
//!
//! The backend gives no real progress signal, so the bar is driven by a
//! timer: fast up to [`SLOWDOWN_AT`], one point per tick after that, and
//! parked at [`SIMULATED_CEILING`] until the requests settle.

use std::time::Duration;

use tokio::task::JoinHandle;

/// Below this the bar moves [`FAST_STEP`] per tick.
pub const SLOWDOWN_AT: u8 = 75;
pub const FAST_STEP: u8 = 5;
pub const SLOW_STEP: u8 = 1;

/// Simulation never goes past this; only a settled lookup shows 100.
pub const SIMULATED_CEILING: u8 = 99;
pub const COMPLETE: u8 = 100;

/// Next simulated value after one tick.
pub fn advance(current: u8) -> u8 {
    if current < SLOWDOWN_AT {
        current + FAST_STEP
    } else if current < SIMULATED_CEILING {
        current + SLOW_STEP
    } else {
        SIMULATED_CEILING
    }
}

/// Runs a callback on a fixed interval in a background task.
///
/// The first call happens one full interval after [`Ticker::start`]. Call
/// [`Ticker::stop`] to cancel; once it returns the callback will not run
/// again. Dropping the ticker aborts the task.
pub struct Ticker {
    handle: JoinHandle<()>,
    cancel: tokio::sync::watch::Sender<bool>,
}

impl Ticker {
    pub fn start<F>(interval: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (cancel_tx, mut cancel_rx) = tokio::sync::watch::channel(false);

        let handle = tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = tokio::time::sleep(interval) => on_tick(),
                    _ = cancel_rx.changed() => break,
                }
            }
        });

        Self {
            handle,
            cancel: cancel_tx,
        }
    }

    /// Cancel the timer and wait for the task to exit.
    pub async fn stop(mut self) {
        let _ = self.cancel.send(true);
        let _ = (&mut self.handle).await;
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn fast_phase_steps_by_five() {
        assert_eq!(advance(0), 5);
        assert_eq!(advance(70), 75);
    }

    #[test]
    fn slow_phase_steps_by_one() {
        assert_eq!(advance(75), 76);
        assert_eq!(advance(98), 99);
    }

    #[test]
    fn clamps_at_ceiling() {
        assert_eq!(advance(99), 99);
        assert_eq!(advance(100), 99);
        assert_eq!(advance(u8::MAX), 99);
    }

    #[test]
    fn off_grid_values_still_move_up() {
        assert_eq!(advance(73), 78);
        assert_eq!(advance(74), 79);
    }

    #[test]
    fn from_zero_never_reaches_complete() {
        let mut p = 0;
        for _ in 0..10_000 {
            let next = advance(p);
            assert!(next >= p);
            assert!(next <= SIMULATED_CEILING);
            p = next;
        }
        assert_eq!(p, SIMULATED_CEILING);
    }

    #[test]
    fn ticks_to_ceiling_from_zero() {
        let mut p = 0;
        let mut ticks = 0;
        while p < SIMULATED_CEILING {
            p = advance(p);
            ticks += 1;
        }
        // 15 fast ticks to 75, then 24 slow ones
        assert_eq!(ticks, 39);
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_fires_on_interval() {
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        let ticker = Ticker::start(Duration::from_millis(100), move || {
            c.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(350)).await;
        ticker.stop().await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn no_ticks_after_stop() {
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        let ticker = Ticker::start(Duration::from_millis(100), move || {
            c.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(150)).await;
        ticker.stop().await;
        let stopped_at = count.load(Ordering::SeqCst);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(count.load(Ordering::SeqCst), stopped_at);
    }

    #[tokio::test]
    async fn immediate_stop() {
        let ticker = Ticker::start(Duration::from_secs(60), || {});
        ticker.stop().await;
    }
}
