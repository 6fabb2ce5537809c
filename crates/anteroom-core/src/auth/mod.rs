//! The auth capability seam.
//!
//! `AuthCapability` is the full surface the login UI needs from an
//! identity provider. The provider owns code delivery, verification,
//! OAuth redirects, passkey ceremonies and session issuance; the UI only
//! consumes these operations and renders their outcomes.
//!
//! `HostedAuthClient` in [`hosted`] is the HTTP implementation.

pub mod error;
pub mod hosted;

use async_trait::async_trait;
pub use error::{AuthError, AuthErrorKind, AuthResult};
pub use hosted::HostedAuthClient;
use serde::{Deserialize, Serialize};

/// OAuth providers the login screen can start a handshake with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OAuthProvider {
    Google,
    Apple,
}

impl OAuthProvider {
    /// Wire identifier sent to the provider.
    pub fn id(self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Apple => "apple",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            OAuthProvider::Google => "Google",
            OAuthProvider::Apple => "Apple",
        }
    }
}

/// The signed-in account as reported by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthUser {
    pub id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl AuthUser {
    /// A short handle for greeting the user: email, then phone, then id.
    pub fn display_handle(&self) -> Option<&str> {
        self.email
            .as_deref()
            .or(self.phone.as_deref())
            .or(self.id.as_deref())
    }
}

/// Everything the login flow delegates to the identity provider.
///
/// Implementations must be cheap to clone behind an `Arc` and safe to
/// call concurrently; the UI runtime invokes these from spawned tasks.
#[async_trait]
pub trait AuthCapability: Send + Sync {
    /// Readiness probe. The login screen stays on a loading gate until
    /// this succeeds.
    async fn ready(&self) -> AuthResult<()>;

    /// Sends a 6-digit code to an email address.
    async fn send_email_code(&self, email: &str) -> AuthResult<()>;

    /// Verifies an emailed code; success establishes the session.
    async fn verify_email_code(&self, code: &str) -> AuthResult<()>;

    /// Sends a 6-digit code to a phone number in `{dial}{digits}` form.
    async fn send_sms_code(&self, phone: &str) -> AuthResult<()>;

    /// Verifies an SMS code; success establishes the session.
    async fn verify_sms_code(&self, code: &str) -> AuthResult<()>;

    /// Runs an OAuth handshake end to end. Resolves once the provider
    /// reports the session established (or the handshake fails).
    async fn start_oauth(&self, provider: OAuthProvider) -> AuthResult<()>;

    /// Runs a passkey login ceremony via the provider.
    async fn start_passkey_login(&self) -> AuthResult<()>;

    /// Returns the current session's user, if one exists.
    async fn current_user(&self) -> AuthResult<Option<AuthUser>>;

    /// Clears the current session.
    async fn logout(&self) -> AuthResult<()>;
}
