use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

/// What: Channels connecting the main loop with its background workers.
///
/// Details:
/// - `event_*` carries terminal input from the polling thread.
/// - `tick_*` wakes the loop once per second so the footer clock advances.
pub struct Channels {
    /// Sender handed to the input polling thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Terminal events consumed by the main loop.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on shutdown so the polling thread stops.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Sender handed to the tick worker.
    pub tick_tx: mpsc::UnboundedSender<()>,
    /// Once-per-second wake-ups.
    pub tick_rx: mpsc::UnboundedReceiver<()>,
}

impl Default for Channels {
    fn default() -> Self {
        Self::new()
    }
}

impl Channels {
    /// Create both channel pairs and a cleared cancellation flag.
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            tick_tx,
            tick_rx,
        }
    }

    /// Take every event that queued up while a request was in flight.
    pub fn drain_pending_events(&mut self) -> Vec<CEvent> {
        let mut pending = Vec::new();
        while let Ok(ev) = self.event_rx.try_recv() {
            pending.push(ev);
        }
        pending
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;

    #[test]
    /// What: Draining returns queued events in order and empties the channel.
    ///
    /// Inputs:
    /// - Two key events sent before draining.
    ///
    /// Output:
    /// - Both events on the first drain, none on the second.
    fn channels_drain_returns_queued_events() {
        let mut ch = Channels::new();
        let a = CEvent::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
        let q = CEvent::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        ch.event_tx.send(a.clone()).expect("send");
        ch.event_tx.send(q.clone()).expect("send");
        assert_eq!(ch.drain_pending_events(), vec![a, q]);
        assert!(ch.drain_pending_events().is_empty());
    }
}
