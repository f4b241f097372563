use std::path::PathBuf;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::events::{EventOutcome, handle_event};
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod channels;
mod handlers;
mod init;

use background::{spawn_event_thread, spawn_tick_worker};
use channels::Channels;
use handlers::{handle_convert, settle_queued_input, validated_amount};
use init::{initialize_app_state, load_remote_data};
pub use init::load_effective_settings;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Environment variable that disables the TTY and network for smoke tests.
pub const HEADLESS_ENV: &str = "FXDASH_TEST_HEADLESS";

/// Options for an interactive session.
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// Settings file from `--config`.
    pub config: Option<PathBuf>,
    /// Start in dark mode regardless of settings.
    pub dark: bool,
}

/// What: Run the dashboard end-to-end: terminal setup, state init, event loop, restore.
///
/// Inputs:
/// - `options`: Command-line overrides.
///
/// Output:
/// - `Ok(())` when the user quits; `Err` only on terminal setup/restore failures.
///
/// Details:
/// - Headless mode (`FXDASH_TEST_HEADLESS=1`) skips the terminal, the input thread and
///   remote loading, then idles on the tick channel.
/// - A conversion draws the "Converting..." frame and runs to completion. Keys pressed
///   meanwhile are discarded before the next event is processed, except exit chords.
pub async fn run(options: RunOptions) -> Result<()> {
    let headless = std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let settings = load_effective_settings(options.config.as_deref());
    let (mut app, mut service) = initialize_app_state(&settings, options.dark);

    let mut channels = Channels::new();
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );
    spawn_tick_worker(channels.tick_tx.clone());

    if let Some(t) = terminal.as_mut() {
        if let Err(e) = t.draw(|f| ui(f, &mut app)) {
            tracing::warn!(error = %e, "[Runtime] draw failed");
        }
        load_remote_data(&mut app, &mut service).await;
    }

    loop {
        if let Some(t) = terminal.as_mut()
            && let Err(e) = t.draw(|f| ui(f, &mut app))
        {
            tracing::warn!(error = %e, "[Runtime] draw failed");
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                match handle_event(&ev, &mut app) {
                    EventOutcome::Quit => break,
                    EventOutcome::Continue => {}
                    EventOutcome::Convert => {
                        if let Some(amount) = validated_amount(&mut app) {
                            app.busy = true;
                            if let Some(t) = terminal.as_mut()
                                && let Err(e) = t.draw(|f| ui(f, &mut app))
                            {
                                tracing::warn!(error = %e, "[Runtime] draw failed");
                            }
                            handle_convert(&mut app, &mut service, amount).await;
                            let pending = channels.drain_pending_events();
                            let quit = settle_queued_input(&mut app, &pending);
                            app.busy = false;
                            if quit {
                                break;
                            }
                        }
                    }
                }
            }
            Some(()) = channels.tick_rx.recv() => {}
            else => break,
        }
    }

    tracing::debug!("[Runtime] main loop exited");
    channels
        .event_thread_cancelled
        .store(true, std::sync::atomic::Ordering::Relaxed);

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
