//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime
//! executes. They represent I/O and task spawning only; the reducer
//! never performs I/O itself.

use anteroom_core::auth::OAuthProvider;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Probe provider readiness.
    CheckReady,

    /// Send a verification code to an email address.
    SendEmailCode { email: String },

    /// Verify an emailed code (and fetch the user on success).
    VerifyEmailCode { code: String },

    /// Send a verification code to a composed phone number.
    SendSmsCode { phone: String },

    /// Verify an SMS code (and fetch the user on success).
    VerifySmsCode { code: String },

    /// Run an OAuth handshake with the given provider.
    StartOAuth { provider: OAuthProvider },

    /// Run a passkey login ceremony.
    StartPasskey,

    /// (Re)start the 1-second resend cooldown ticker.
    StartCooldown,

    /// Stop the resend cooldown ticker, if one is running.
    CancelCooldown,
}
