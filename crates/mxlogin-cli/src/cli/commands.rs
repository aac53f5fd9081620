//! Subcommand implementations.

use anyhow::{Result, bail};
use mxlogin_core::client::{LoginClient, LoginOutcome};
use mxlogin_core::config::{Config, paths};
use mxlogin_core::credentials::LoginAttempt;

/// Non-interactive login: validate, submit once, print the outcome.
///
/// Exit status is carried through the returned `Result`: authenticated is
/// `Ok`, everything else is an error the caller prints.
pub async fn login(config: &Config, username: String, password: String) -> Result<()> {
    let attempt = LoginAttempt::new(username, password);

    if let Err(errors) = attempt.validate() {
        for message in [&errors.username, &errors.password].into_iter().flatten() {
            eprintln!("{message}");
        }
        bail!("Validation failed");
    }

    let client = LoginClient::new(config.endpoint.clone())?;
    match client.submit(&attempt).await? {
        LoginOutcome::Authenticated { session_cookie } => {
            println!("Login successful");
            match session_cookie {
                Some(cookie) => println!("Session cookie (shown once, not retained): {cookie}"),
                None => println!("No session cookie returned"),
            }
            Ok(())
        }
        LoginOutcome::Rejected { status } => {
            tracing::warn!(%status, "non-interactive login rejected");
            bail!("Incorrect credentials")
        }
    }
}

/// Prints the resolved config file path.
pub fn config_path() -> Result<()> {
    println!("{}", paths::config_path().display());
    Ok(())
}
