//! Effect handler implementations.
//!
//! Pure async functions - the runtime spawns them and sends the returned
//! event to the inbox. Each one wraps a provider call and folds the
//! outcome into an `AuthUiEvent`.

use std::sync::Arc;

use anteroom_core::auth::{AuthCapability, AuthResult, AuthUser, OAuthProvider};

use crate::events::{AuthUiEvent, UiEvent};

pub async fn check_ready(auth: Arc<dyn AuthCapability>) -> UiEvent {
    let result = auth.ready().await;
    if let Err(ref e) = result {
        tracing::warn!(error = %e, "readiness probe failed");
    }
    UiEvent::Auth(AuthUiEvent::Ready(result))
}

pub async fn send_email_code(auth: Arc<dyn AuthCapability>, email: String) -> UiEvent {
    let result = auth.send_email_code(&email).await;
    if let Err(ref e) = result {
        tracing::warn!(error = %e, "email code send failed");
    }
    UiEvent::Auth(AuthUiEvent::EmailCodeSent(result))
}

pub async fn verify_email_code(auth: Arc<dyn AuthCapability>, code: String) -> UiEvent {
    let result = verify_then_fetch_user(&*auth, auth.verify_email_code(&code).await).await;
    if let Err(ref e) = result {
        tracing::warn!(error = %e, "email code verification failed");
    }
    UiEvent::Auth(AuthUiEvent::EmailVerified(result))
}

pub async fn send_sms_code(auth: Arc<dyn AuthCapability>, phone: String) -> UiEvent {
    let result = auth.send_sms_code(&phone).await;
    if let Err(ref e) = result {
        tracing::warn!(error = %e, "sms code send failed");
    }
    UiEvent::Auth(AuthUiEvent::SmsCodeSent(result))
}

pub async fn verify_sms_code(auth: Arc<dyn AuthCapability>, code: String) -> UiEvent {
    let result = verify_then_fetch_user(&*auth, auth.verify_sms_code(&code).await).await;
    if let Err(ref e) = result {
        tracing::warn!(error = %e, "sms code verification failed");
    }
    UiEvent::Auth(AuthUiEvent::SmsVerified(result))
}

pub async fn start_oauth(auth: Arc<dyn AuthCapability>, provider: OAuthProvider) -> UiEvent {
    let result = verify_then_fetch_user(&*auth, auth.start_oauth(provider).await).await;
    if let Err(ref e) = result {
        tracing::warn!(provider = provider.id(), error = %e, "oauth handshake failed");
    }
    UiEvent::Auth(AuthUiEvent::OAuthFinished { provider, result })
}

pub async fn start_passkey(auth: Arc<dyn AuthCapability>) -> UiEvent {
    let result = verify_then_fetch_user(&*auth, auth.start_passkey_login().await).await;
    if let Err(ref e) = result {
        tracing::warn!(error = %e, "passkey ceremony failed");
    }
    UiEvent::Auth(AuthUiEvent::PasskeyFinished(result))
}

/// On success, follows up with `current_user` so the UI can greet the
/// account that just signed in. A failed user fetch does not fail the
/// login; the session is already established.
async fn verify_then_fetch_user(
    auth: &dyn AuthCapability,
    outcome: AuthResult<()>,
) -> AuthResult<Option<AuthUser>> {
    outcome?;
    match auth.current_user().await {
        Ok(user) => Ok(user),
        Err(e) => {
            tracing::warn!(error = %e, "user fetch after sign-in failed");
            Ok(None)
        }
    }
}
