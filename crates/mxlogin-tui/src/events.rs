//! Events consumed by the reducer.

use mxlogin_core::client::LoginOutcome;

/// Input to the reducer. Collected by the runtime from the terminal, the
/// tick timer, and the async inbox.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick (spinner animation).
    Tick,
    /// Raw terminal event (keys, paste, resize).
    Terminal(crossterm::event::Event),
    /// Result of the spawned login submission.
    ///
    /// Transport errors arrive as the rendered anyhow chain; the runtime
    /// handler has already logged them.
    SubmitFinished(Result<LoginOutcome, String>),
}
