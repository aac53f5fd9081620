//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only; the reducer itself never
//! performs I/O.

use mxlogin_core::credentials::LoginAttempt;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,
    /// Spawn the async login POST for a validated attempt.
    SubmitLogin { attempt: LoginAttempt },
}
