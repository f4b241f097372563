use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

/// Interval between clock ticks.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// What: Spawn the OS thread that polls crossterm for terminal events.
///
/// Inputs:
/// - `headless`: Skip the thread entirely (tests without a TTY).
/// - `event_tx`: Where events are forwarded.
/// - `event_thread_cancelled`: Set by the main loop on exit.
///
/// Details:
/// - Polls with a short timeout so cancellation is noticed promptly.
/// - Exits when the receiver is dropped.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    event_thread_cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !event_thread_cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if event_thread_cancelled.load(Ordering::Relaxed)
                            || event_tx.send(ev).is_err()
                        {
                            break;
                        }
                    }
                    Err(e) => tracing::debug!(error = %e, "[Runtime] transient event read error"),
                },
                Ok(false) => {}
                Err(e) => tracing::debug!(error = %e, "[Runtime] event poll error"),
            }
        }
        tracing::debug!("[Runtime] event thread exiting");
    });
}

/// Spawn the once-per-second tick used to refresh time-dependent text.
pub fn spawn_tick_worker(tick_tx: mpsc::UnboundedSender<()>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}
