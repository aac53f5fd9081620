//! Full-screen TUI implementation for the mxlogin screen.

pub mod effects;
pub mod events;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
use mxlogin_core::client::LoginClient;
use mxlogin_core::config::Config;
pub use runtime::TuiRuntime;

/// Runs the interactive login screen.
///
/// This is the whole navigation surface of the app: one screen, mounted
/// unconditionally, no routing.
pub async fn run_login_screen(config: &Config) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The login screen requires a terminal.\n\
             Use `mxlogin login --username ... --password ...` for non-interactive use."
        );
    }

    let client = LoginClient::new(config.endpoint.clone())?;
    let mut runtime = TuiRuntime::new(client)?;
    runtime.run()
}
