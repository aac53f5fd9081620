//! Reducer for the login screen.
//!
//! All state mutations happen here. The runtime calls `update(state, event)`
//! and executes the returned effects.
//!
//! Submission state machine:
//! `Idle -> Validating -> (Invalid | Submitting) -> (Success | Failure) -> Idle`.
//! Validation runs synchronously inside the submit action; `Invalid` shows
//! inline field errors and clears them on the next edit of that field.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use mxlogin_core::client::LoginOutcome;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::overlays::{AlertKind, AlertState};
use crate::state::{AppState, SubmissionState};

/// The main reducer function.
pub fn update(state: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            if state.submission.is_submitting() {
                state.spinner_frame = state.spinner_frame.wrapping_add(1);
            }
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(state, term_event),
        UiEvent::SubmitFinished(result) => {
            state.submission = SubmissionState::Idle;
            state.alert = Some(AlertState::new(match result {
                Ok(LoginOutcome::Authenticated { session_cookie }) => {
                    AlertKind::Success { session_cookie }
                }
                Ok(LoginOutcome::Rejected { .. }) => AlertKind::Rejected,
                Err(_) => AlertKind::ConnectionFailed,
            }));
            vec![]
        }
    }
}

fn handle_terminal_event(state: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        Event::Paste(text) => {
            if state.alert.is_none() {
                if let Some(field) = state.form.focused_field_mut() {
                    field.insert_str(&text);
                }
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Ctrl+C quits from anywhere, alert open or not.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    // An open alert takes over keyboard input.
    if let Some(alert) = &state.alert {
        if alert.handle_key(key) {
            state.alert = None;
        }
        return vec![];
    }

    match key.code {
        KeyCode::Esc => {
            // Quit only from the idle form; while submitting the request is
            // left to finish (no cancellation is ever issued).
            if state.submission.is_submitting() {
                vec![]
            } else {
                vec![UiEffect::Quit]
            }
        }
        KeyCode::Tab | KeyCode::Down => {
            state.form.focus = state.form.focus.next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.form.focus = state.form.focus.prev();
            vec![]
        }
        KeyCode::Enter => submit(state),
        KeyCode::Backspace => {
            if let Some(field) = state.form.focused_field_mut() {
                field.delete_back();
            }
            vec![]
        }
        KeyCode::Char(c) => {
            if let Some(field) = state.form.focused_field_mut() {
                field.insert(c);
            }
            vec![]
        }
        _ => vec![],
    }
}

/// The submit action: synchronous validation, then at most one request.
fn submit(state: &mut AppState) -> Vec<UiEffect> {
    // Re-entrancy guard: ignore submit while a request is in flight.
    if state.submission.is_submitting() {
        return vec![];
    }

    let attempt = state.form.attempt();
    match attempt.validate() {
        Err(errors) => {
            state.form.username.error = errors.username;
            state.form.password.error = errors.password;
            vec![]
        }
        Ok(()) => {
            state.form.username.error = None;
            state.form.password.error = None;
            state.submission = SubmissionState::Submitting;
            vec![UiEffect::SubmitLogin { attempt }]
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::state::Focus;

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn type_str(state: &mut AppState, text: &str) {
        for c in text.chars() {
            update(state, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_fills_the_focused_field() {
        let mut state = AppState::new();
        type_str(&mut state, "alice");
        assert_eq!(state.form.username.value, "alice");

        update(&mut state, key(KeyCode::Tab));
        type_str(&mut state, "secret1");
        assert_eq!(state.form.password.value, "secret1");
    }

    #[test]
    fn submit_with_empty_form_sets_both_errors_and_no_effect() {
        let mut state = AppState::new();
        let effects = update(&mut state, key(KeyCode::Enter));
        assert!(effects.is_empty());
        assert!(state.form.username.error.is_some());
        assert!(state.form.password.error.is_some());
        assert_eq!(state.submission, SubmissionState::Idle);
    }

    #[test]
    fn short_password_reports_too_short() {
        let mut state = AppState::new();
        type_str(&mut state, "alice");
        update(&mut state, key(KeyCode::Tab));
        type_str(&mut state, "abc");
        update(&mut state, key(KeyCode::Enter));
        assert!(state.form.username.error.is_none());
        assert!(
            state
                .form
                .password
                .error
                .as_deref()
                .unwrap()
                .contains("too short")
        );
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut state = AppState::new();
        update(&mut state, key(KeyCode::Enter));
        assert!(state.form.username.error.is_some());

        type_str(&mut state, "a");
        assert!(state.form.username.error.is_none());
        // The other field's error stays until that field is edited.
        assert!(state.form.password.error.is_some());
    }

    #[test]
    fn valid_submit_transitions_to_submitting_with_effect() {
        let mut state = AppState::new();
        type_str(&mut state, "alice");
        update(&mut state, key(KeyCode::Tab));
        type_str(&mut state, "secret1");

        let effects = update(&mut state, key(KeyCode::Enter));
        assert_eq!(state.submission, SubmissionState::Submitting);
        assert_eq!(effects.len(), 1);
        match &effects[0] {
            UiEffect::SubmitLogin { attempt } => {
                assert_eq!(attempt.username, "alice");
                assert_eq!(attempt.encoded_credentials(), "YWxpY2U6c2VjcmV0MQ==");
            }
            other => panic!("expected SubmitLogin, got {other:?}"),
        }
    }

    #[test]
    fn submit_while_submitting_is_a_no_op() {
        let mut state = AppState::new();
        type_str(&mut state, "alice");
        update(&mut state, key(KeyCode::Tab));
        type_str(&mut state, "secret1");
        update(&mut state, key(KeyCode::Enter));

        let effects = update(&mut state, key(KeyCode::Enter));
        assert!(effects.is_empty());
        assert_eq!(state.submission, SubmissionState::Submitting);
    }

    #[test]
    fn success_result_opens_alert_with_cookie_and_returns_to_idle() {
        let mut state = AppState::new();
        state.submission = SubmissionState::Submitting;

        update(
            &mut state,
            UiEvent::SubmitFinished(Ok(LoginOutcome::Authenticated {
                session_cookie: Some("sid=abc123".to_string()),
            })),
        );

        assert_eq!(state.submission, SubmissionState::Idle);
        let alert = state.alert.as_ref().unwrap();
        assert_eq!(
            alert.kind,
            AlertKind::Success {
                session_cookie: Some("sid=abc123".to_string())
            }
        );
    }

    #[test]
    fn rejected_result_opens_generic_failure_alert() {
        let mut state = AppState::new();
        state.submission = SubmissionState::Submitting;

        update(
            &mut state,
            UiEvent::SubmitFinished(Ok(LoginOutcome::Rejected {
                status: reqwest::StatusCode::UNAUTHORIZED,
            })),
        );

        assert_eq!(state.alert.as_ref().unwrap().kind, AlertKind::Rejected);
    }

    #[test]
    fn transport_error_opens_connection_alert() {
        let mut state = AppState::new();
        state.submission = SubmissionState::Submitting;

        update(
            &mut state,
            UiEvent::SubmitFinished(Err("connection refused".to_string())),
        );

        assert_eq!(
            state.alert.as_ref().unwrap().kind,
            AlertKind::ConnectionFailed
        );
    }

    #[test]
    fn dismissing_the_alert_returns_to_the_idle_form() {
        let mut state = AppState::new();
        state.alert = Some(AlertState::new(AlertKind::Rejected));

        update(&mut state, key(KeyCode::Enter));
        assert!(state.alert.is_none());
        assert_eq!(state.submission, SubmissionState::Idle);
    }

    #[test]
    fn keys_other_than_dismiss_do_not_reach_the_form_while_alert_open() {
        let mut state = AppState::new();
        state.alert = Some(AlertState::new(AlertKind::Rejected));

        update(&mut state, key(KeyCode::Char('x')));
        assert!(state.form.username.value.is_empty());
        assert!(state.alert.is_some());
    }

    #[test]
    fn esc_quits_only_when_idle() {
        let mut state = AppState::new();
        let effects = update(&mut state, key(KeyCode::Esc));
        assert!(matches!(effects.as_slice(), [UiEffect::Quit]));

        let mut state = AppState::new();
        state.submission = SubmissionState::Submitting;
        let effects = update(&mut state, key(KeyCode::Esc));
        assert!(effects.is_empty());
    }

    #[test]
    fn focus_cycles_through_the_three_controls() {
        let mut state = AppState::new();
        assert_eq!(state.form.focus, Focus::Username);
        update(&mut state, key(KeyCode::Tab));
        assert_eq!(state.form.focus, Focus::Password);
        update(&mut state, key(KeyCode::Tab));
        assert_eq!(state.form.focus, Focus::Submit);
        update(&mut state, key(KeyCode::Tab));
        assert_eq!(state.form.focus, Focus::Username);
        update(&mut state, key(KeyCode::BackTab));
        assert_eq!(state.form.focus, Focus::Submit);
    }

    #[test]
    fn paste_inserts_into_the_focused_field() {
        let mut state = AppState::new();
        update(&mut state, key(KeyCode::Tab));
        update(
            &mut state,
            UiEvent::Terminal(Event::Paste("secret1\n".to_string())),
        );
        // Control characters from the paste are dropped.
        assert_eq!(state.form.password.value, "secret1");
    }
}
