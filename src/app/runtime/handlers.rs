use crossterm::event::Event as CEvent;

use crate::events::{EventOutcome, handle_event};
use crate::i18n::MessageKey;
use crate::logic::convert::{MIN_AMOUNT, perform_conversion};
use crate::sources::FxService;
use crate::state::{AppState, ToastKind};
use crate::util::now_local;

/// What: Check the amount field before starting a conversion.
///
/// Output:
/// - `Some(amount)` when valid; `None` after showing the invalid-amount toast.
pub fn validated_amount(app: &mut AppState) -> Option<f64> {
    let amount = app.parsed_amount();
    if amount.is_none() {
        let text = app.translator.t_fmt1(MessageKey::InvalidAmount, MIN_AMOUNT);
        app.toast_text(text, ToastKind::Warning);
    }
    amount
}

/// What: Run a conversion for the current selection and store the outcome.
///
/// Inputs:
/// - `app`: Application state; its session is updated by the conversion.
/// - `service`: Rate service.
/// - `amount`: Validated amount.
///
/// Details:
/// - Success replaces the result panel and scrolls history to the newest row.
/// - Failure keeps the previous result and shows the failed-data toast.
pub async fn handle_convert(app: &mut AppState, service: &mut FxService, amount: f64) {
    let pair = app.current_pair();
    let with_analytics = app.show_analytics;
    match perform_conversion(
        service,
        &mut app.session,
        &pair,
        amount,
        now_local(),
        with_analytics,
    )
    .await
    {
        Ok(outcome) => {
            app.last_outcome = Some(outcome);
            app.history_scroll = 0;
        }
        Err(e) => {
            tracing::warn!(pair = %pair.label(), error = %e, "[Runtime] conversion failed");
            app.toast_key(MessageKey::FailedData, ToastKind::Error);
        }
    }
}

/// What: Settle input that arrived while a conversion was running.
///
/// Inputs:
/// - `app`: Application state, still marked busy.
/// - `pending`: Events drained from the input channel.
///
/// Output:
/// - `true` when one of the events was an exit chord.
///
/// Details:
/// - Events go through [`handle_event`] while `busy` is set, so everything except
///   exit is ignored.
pub fn settle_queued_input(app: &mut AppState, pending: &[CEvent]) -> bool {
    let mut quit = false;
    let mut ignored = 0_usize;
    for ev in pending {
        if handle_event(ev, app) == EventOutcome::Quit {
            quit = true;
        } else {
            ignored += 1;
        }
    }
    if ignored > 0 {
        tracing::debug!(ignored, "[Runtime] ignored input received while busy");
    }
    quit
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;

    #[test]
    /// What: Queued keys are ignored while busy but an exit chord is honored.
    ///
    /// Inputs:
    /// - Busy state; `7`, Enter, then Ctrl+Q queued.
    ///
    /// Output:
    /// - Amount text unchanged; `true` returned only when Ctrl+Q is present.
    fn settle_queued_input_keeps_exit_only() {
        let mut app = AppState::default();
        app.busy = true;
        let before = app.amount_input.clone();
        let typing = [
            CEvent::Key(KeyEvent::new(KeyCode::Char('7'), KeyModifiers::NONE)),
            CEvent::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
        ];
        assert!(!settle_queued_input(&mut app, &typing));
        assert_eq!(app.amount_input, before);

        let mut with_quit = typing.to_vec();
        with_quit.push(CEvent::Key(KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::CONTROL,
        )));
        assert!(settle_queued_input(&mut app, &with_quit));
    }
}
