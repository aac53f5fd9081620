//! Login attempt model, field validation, and credential encoding.
//!
//! Validation is a pure function over the two input strings. It reports all
//! violations at once rather than stopping at the first failing field, so the
//! form can show every error inline in one pass.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_CHARS: usize = 6;

/// One login attempt, built fresh from the form fields on each submit.
///
/// Never persisted. The attempt lives for the duration of a single
/// submission and is dropped once the outcome has been shown.
#[derive(Debug, Clone)]
pub struct LoginAttempt {
    pub username: String,
    pub password: String,
}

impl LoginAttempt {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the `maxauth` header value for this attempt.
    ///
    /// This is the standard base64 encoding of the UTF-8 bytes of
    /// `"<username>:<password>"`. Base64 is a reversible encoding, not
    /// encryption - it provides no confidentiality. Anyone holding the
    /// header value can recover the plaintext credentials.
    pub fn encoded_credentials(&self) -> String {
        STANDARD.encode(format!("{}:{}", self.username, self.password))
    }

    /// Runs field validation, returning all violations at once.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields(&self.username, &self.password)
    }
}

/// Per-field validation error messages. Both may be set simultaneously.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

/// Validates the two form fields.
///
/// - username: required, must contain a non-whitespace character
/// - password: required, minimum [`MIN_PASSWORD_CHARS`] characters
pub fn validate_fields(username: &str, password: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if username.trim().is_empty() {
        errors.username = Some("Username is required".to_string());
    }

    if password.is_empty() {
        errors.password = Some("Password is required".to_string());
    } else if password.chars().count() < MIN_PASSWORD_CHARS {
        errors.password = Some(format!(
            "Password is too short (minimum {MIN_PASSWORD_CHARS} characters)"
        ));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_fields_pass() {
        assert!(validate_fields("alice", "secret1").is_ok());
    }

    #[test]
    fn empty_username_is_required_error() {
        let errors = validate_fields("", "secret1").unwrap_err();
        assert_eq!(errors.username.as_deref(), Some("Username is required"));
        assert!(errors.password.is_none());
    }

    #[test]
    fn whitespace_username_is_required_error() {
        let errors = validate_fields("   ", "secret1").unwrap_err();
        assert!(errors.username.is_some());
    }

    #[test]
    fn empty_password_is_required_error() {
        let errors = validate_fields("alice", "").unwrap_err();
        assert_eq!(errors.password.as_deref(), Some("Password is required"));
    }

    #[test]
    fn short_password_is_too_short_regardless_of_username() {
        // Valid username
        let errors = validate_fields("alice", "abc").unwrap_err();
        assert!(errors.password.as_deref().unwrap().contains("too short"));
        assert!(errors.username.is_none());

        // Invalid username - both errors reported, no short-circuit
        let errors = validate_fields("", "abc").unwrap_err();
        assert!(errors.username.is_some());
        assert!(errors.password.is_some());
    }

    #[test]
    fn password_length_counts_characters_not_bytes() {
        // Six multibyte characters: 6 chars, 12 bytes
        assert!(validate_fields("alice", "éééééé").is_ok());
    }

    #[test]
    fn exactly_six_characters_passes() {
        assert!(validate_fields("alice", "123456").is_ok());
    }

    #[test]
    fn encoding_round_trips_to_user_colon_pass() {
        let attempt = LoginAttempt::new("alice", "secret1");
        let encoded = attempt.encoded_credentials();
        let decoded = STANDARD.decode(&encoded).unwrap();
        assert_eq!(decoded, b"alice:secret1");
    }

    #[test]
    fn encoding_matches_known_value() {
        // echo -n 'alice:secret1' | base64
        let attempt = LoginAttempt::new("alice", "secret1");
        assert_eq!(attempt.encoded_credentials(), "YWxpY2U6c2VjcmV0MQ==");
    }

    #[test]
    fn encoding_handles_colon_in_password() {
        let attempt = LoginAttempt::new("bob", "pa:ss:word");
        let decoded = STANDARD.decode(attempt.encoded_credentials()).unwrap();
        assert_eq!(decoded, b"bob:pa:ss:word");
    }
}
