//! Structured errors for auth operations.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error category, one per failure surface of the login flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthErrorKind {
    /// Sending a verification code failed (email or SMS).
    SendCode,
    /// Submitted code was rejected by the provider.
    VerifyCode,
    /// OAuth handshake failed or timed out.
    OAuth,
    /// Passkey ceremony failed.
    Passkey,
    /// Network / transport level failure (request never got an answer).
    Transport,
}

impl fmt::Display for AuthErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthErrorKind::SendCode => write!(f, "send_code"),
            AuthErrorKind::VerifyCode => write!(f, "verify_code"),
            AuthErrorKind::OAuth => write!(f, "oauth"),
            AuthErrorKind::Passkey => write!(f, "passkey"),
            AuthErrorKind::Transport => write!(f, "transport"),
        }
    }
}

/// Structured error from the auth provider with kind and details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthError {
    /// Error category
    pub kind: AuthErrorKind,
    /// One-line summary suitable for display
    pub message: String,
    /// Optional additional details (e.g., raw error body)
    pub details: Option<String>,
}

impl AuthError {
    pub fn new(kind: AuthErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    /// Creates an error from an HTTP status response.
    ///
    /// Tries to extract the provider's own message from a
    /// `{"error":{"message":...}}` body; the raw body is kept in details.
    pub fn http_status(kind: AuthErrorKind, status: u16, body: &str) -> Self {
        if !body.is_empty()
            && let Ok(json) = serde_json::from_str::<Value>(body)
            && let Some(error_obj) = json.get("error")
            && let Some(msg) = error_obj.get("message").and_then(|v| v.as_str())
        {
            return Self {
                kind,
                message: msg.to_string(),
                details: Some(body.to_string()),
            };
        }
        Self {
            kind,
            message: format!("HTTP {status}"),
            details: (!body.is_empty()).then(|| body.to_string()),
        }
    }

    /// Creates a transport error from a reqwest failure.
    pub fn transport(err: &reqwest::Error) -> Self {
        Self::new(AuthErrorKind::Transport, err.to_string())
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AuthError {}

/// Result type for auth operations.
pub type AuthResult<T> = std::result::Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_mines_error_message() {
        let body = r#"{"error":{"message":"Invalid phone number"}}"#;
        let err = AuthError::http_status(AuthErrorKind::SendCode, 422, body);
        assert_eq!(err.message, "Invalid phone number");
        assert_eq!(err.details.as_deref(), Some(body));
    }

    #[test]
    fn test_http_status_falls_back_to_status_line() {
        let err = AuthError::http_status(AuthErrorKind::VerifyCode, 500, "boom");
        assert_eq!(err.message, "HTTP 500");
        assert_eq!(err.details.as_deref(), Some("boom"));
    }

    #[test]
    fn test_http_status_empty_body_has_no_details() {
        let err = AuthError::http_status(AuthErrorKind::OAuth, 502, "");
        assert_eq!(err.message, "HTTP 502");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_display_is_message_only() {
        let err = AuthError::new(AuthErrorKind::Passkey, "ceremony cancelled");
        assert_eq!(err.to_string(), "ceremony cancelled");
    }
}
