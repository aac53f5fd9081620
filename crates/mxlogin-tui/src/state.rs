//! Application state for the login screen.
//!
//! The state splits into the form itself (`FormState`), the submission state
//! machine (`SubmissionState`), and an optional modal alert. The reducer in
//! `update.rs` is the only place that mutates any of it.

use mxlogin_core::credentials::LoginAttempt;

use crate::overlays::AlertState;

/// Which control currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Username,
    Password,
    Submit,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Username => Focus::Password,
            Focus::Password => Focus::Submit,
            Focus::Submit => Focus::Username,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Username => Focus::Submit,
            Focus::Password => Focus::Username,
            Focus::Submit => Focus::Password,
        }
    }
}

/// One text field with its inline validation error.
#[derive(Debug, Default)]
pub struct FieldState {
    pub value: String,
    pub error: Option<String>,
}

impl FieldState {
    /// Inserts a character and clears the field's error (editing leaves the
    /// `Invalid` state).
    pub fn insert(&mut self, c: char) {
        self.value.push(c);
        self.error = None;
    }

    /// Inserts pasted text, dropping control characters.
    pub fn insert_str(&mut self, text: &str) {
        self.value.extend(text.chars().filter(|c| !c.is_control()));
        self.error = None;
    }

    /// Removes the last character and clears the field's error.
    pub fn delete_back(&mut self) {
        self.value.pop();
        self.error = None;
    }
}

/// The two-field login form.
#[derive(Debug)]
pub struct FormState {
    pub username: FieldState,
    pub password: FieldState,
    pub focus: Focus,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            username: FieldState::default(),
            password: FieldState::default(),
            focus: Focus::Username,
        }
    }
}

impl FormState {
    pub fn focused_field_mut(&mut self) -> Option<&mut FieldState> {
        match self.focus {
            Focus::Username => Some(&mut self.username),
            Focus::Password => Some(&mut self.password),
            Focus::Submit => None,
        }
    }

    /// Builds a fresh attempt from the current field values.
    pub fn attempt(&self) -> LoginAttempt {
        LoginAttempt::new(self.username.value.clone(), self.password.value.clone())
    }
}

/// Submission state machine.
///
/// At most one request is ever in flight: the reducer ignores the submit
/// action while `Submitting` (re-entrancy guard).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    /// Form displayed, no request in flight.
    Idle,
    /// Exactly one outstanding network request.
    Submitting,
}

impl SubmissionState {
    pub fn is_submitting(self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}

/// Combined application state for the login screen.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    pub form: FormState,
    pub submission: SubmissionState,
    /// Modal alert for terminal outcomes; blocks form input while open.
    pub alert: Option<AlertState>,
    /// Spinner animation frame, advanced on Tick while submitting.
    pub spinner_frame: u8,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            form: FormState::default(),
            submission: SubmissionState::Idle,
            alert: None,
            spinner_frame: 0,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
