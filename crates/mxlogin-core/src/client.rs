//! HTTP login client.
//!
//! One POST per submission, `maxauth` header carrying the base64-encoded
//! credentials, no body, no retry. The client is built without a request
//! timeout: the original front-end configured none, and that behavior is
//! preserved rather than silently improved.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, SET_COOKIE};

use crate::credentials::LoginAttempt;

/// Name of the authentication header Maximo expects.
pub const MAXAUTH_HEADER: &str = "maxauth";

/// Terminal result of one login submission.
///
/// Transport-level failures (DNS, refused connection, aborted stream) are not
/// outcomes; they propagate as errors from [`LoginClient::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The server answered 2xx. The session cookie comes from the
    /// `Set-Cookie` response header and may be absent. It is displayed once
    /// and never stored for reuse.
    Authenticated { session_cookie: Option<String> },
    /// The server answered non-2xx. No distinction is made between bad
    /// credentials and server-side failure.
    Rejected { status: StatusCode },
}

/// Client for the login endpoint.
pub struct LoginClient {
    http: reqwest::Client,
    endpoint: String,
}

impl LoginClient {
    /// Creates a client posting to the given endpoint.
    ///
    /// The builder is used with reqwest's defaults on purpose: no request
    /// timeout (the original front-end configured none) and no cookie store
    /// (the session cookie is shown once, never replayed). The builder form
    /// also returns an error where `reqwest::Client::new` would panic.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submits one login attempt.
    ///
    /// Issues exactly one POST with the encoded credentials in the `maxauth`
    /// header and `Content-Type: application/json`, no body. Any HTTP status
    /// maps to an outcome; only transport failures are errors.
    ///
    /// # Errors
    /// Returns an error if the request cannot be sent or the connection
    /// fails mid-response.
    pub async fn submit(&self, attempt: &LoginAttempt) -> Result<LoginOutcome> {
        tracing::info!(endpoint = %self.endpoint, username = %attempt.username, "submitting login");

        let response = self
            .http
            .post(&self.endpoint)
            .header(MAXAUTH_HEADER, attempt.encoded_credentials())
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to reach login endpoint {}", self.endpoint))?;

        let status = response.status();
        if status.is_success() {
            let session_cookie = response
                .headers()
                .get(SET_COOKIE)
                .and_then(|v| v.to_str().ok())
                .map(ToString::to_string);
            tracing::info!(%status, has_cookie = session_cookie.is_some(), "login accepted");
            Ok(LoginOutcome::Authenticated { session_cookie })
        } else {
            tracing::warn!(%status, "login rejected");
            Ok(LoginOutcome::Rejected { status })
        }
    }
}
