//! HTTP client for the hosted identity provider.
//!
//! Thin wrapper over the provider's JSON surface. Every call is a unary
//! request; the provider keeps all session state server-side, keyed by a
//! per-install device id sent on each request.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use url::Url;

use super::{AuthCapability, AuthError, AuthErrorKind, AuthResult, AuthUser, OAuthProvider};
use crate::config::ProviderConfig;

/// Header carrying the per-install device id.
const DEVICE_HEADER: &str = "x-anteroom-device";

/// Header carrying the configured application id.
const APP_HEADER: &str = "x-anteroom-app";

/// How often the OAuth result endpoint is polled.
const OAUTH_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// How long to wait for the browser handshake before giving up.
const OAUTH_TIMEOUT: Duration = Duration::from_secs(120);

/// Set to skip opening the system browser (integration tests).
const NO_BROWSER_ENV: &str = "ANTEROOM_NO_BROWSER";

#[derive(Debug, Serialize)]
struct EmailPayload<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct PhonePayload<'a> {
    phone: &'a str,
}

#[derive(Debug, Serialize)]
struct CodePayload<'a> {
    code: &'a str,
}

#[derive(Debug, Serialize)]
struct OAuthInitPayload<'a> {
    provider: &'a str,
}

#[derive(Debug, Deserialize)]
struct OAuthInitResponse {
    authorization_url: String,
    nonce: String,
}

#[derive(Debug, Deserialize)]
struct OAuthResultResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UserEnvelope {
    user: Option<AuthUser>,
}

/// Reqwest-backed implementation of [`AuthCapability`].
#[derive(Debug, Clone)]
pub struct HostedAuthClient {
    http: reqwest::Client,
    base_url: Url,
    app_id: String,
    device_id: String,
}

impl HostedAuthClient {
    /// Builds a client from provider configuration.
    ///
    /// # Errors
    /// Returns an error if the base URL is malformed or the HTTP client
    /// cannot be constructed.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let mut base_url = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid provider base URL: {}", config.base_url))?;
        // Url::join drops the last path segment without this.
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url,
            app_id: config.app_id.clone(),
            device_id: uuid::Uuid::new_v4().to_string(),
        })
    }

    /// Attaches the device and app identification headers.
    fn identify(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request.header(DEVICE_HEADER, &self.device_id);
        if self.app_id.is_empty() {
            request
        } else {
            request.header(APP_HEADER, &self.app_id)
        }
    }

    fn endpoint(&self, path: &str) -> AuthResult<Url> {
        self.base_url.join(path).map_err(|e| {
            AuthError::new(AuthErrorKind::Transport, format!("Bad endpoint {path}: {e}"))
        })
    }

    /// POSTs a JSON payload and maps non-2xx responses to `kind`.
    async fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        kind: AuthErrorKind,
    ) -> AuthResult<reqwest::Response> {
        let url = self.endpoint(path)?;
        let response = self
            .identify(self.http.post(url))
            .json(body)
            .send()
            .await
            .map_err(|e| AuthError::transport(&e))?;
        Self::check_status(response, kind).await
    }

    async fn get(&self, path: &str, kind: AuthErrorKind) -> AuthResult<reqwest::Response> {
        let url = self.endpoint(path)?;
        let response = self
            .identify(self.http.get(url))
            .send()
            .await
            .map_err(|e| AuthError::transport(&e))?;
        Self::check_status(response, kind).await
    }

    async fn check_status(
        response: reqwest::Response,
        kind: AuthErrorKind,
    ) -> AuthResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(%status, kind = %kind, "provider request failed");
        Err(AuthError::http_status(kind, status.as_u16(), &body))
    }

    /// Polls the OAuth result endpoint until the handshake completes,
    /// fails, or the timeout elapses.
    async fn wait_oauth_result(&self, nonce: &str) -> AuthResult<()> {
        let deadline = tokio::time::Instant::now() + OAUTH_TIMEOUT;
        loop {
            let path = format!("oauth/result?nonce={nonce}");
            let response = self.get(&path, AuthErrorKind::OAuth).await?;
            let result: OAuthResultResponse = response
                .json()
                .await
                .map_err(|e| AuthError::new(AuthErrorKind::OAuth, e.to_string()))?;
            match result.status.as_str() {
                "complete" => return Ok(()),
                "failed" => {
                    let message = result
                        .message
                        .unwrap_or_else(|| "OAuth handshake failed".to_string());
                    return Err(AuthError::new(AuthErrorKind::OAuth, message));
                }
                _ => {}
            }
            if tokio::time::Instant::now() >= deadline {
                return Err(AuthError::new(
                    AuthErrorKind::OAuth,
                    "Timed out waiting for browser sign-in",
                ));
            }
            tokio::time::sleep(OAUTH_POLL_INTERVAL).await;
        }
    }
}

#[async_trait::async_trait]
impl AuthCapability for HostedAuthClient {
    async fn ready(&self) -> AuthResult<()> {
        self.get("ready", AuthErrorKind::Transport).await?;
        Ok(())
    }

    async fn send_email_code(&self, email: &str) -> AuthResult<()> {
        self.post_json(
            "otp/email/send",
            &EmailPayload { email },
            AuthErrorKind::SendCode,
        )
        .await?;
        Ok(())
    }

    async fn verify_email_code(&self, code: &str) -> AuthResult<()> {
        self.post_json(
            "otp/email/verify",
            &CodePayload { code },
            AuthErrorKind::VerifyCode,
        )
        .await?;
        Ok(())
    }

    async fn send_sms_code(&self, phone: &str) -> AuthResult<()> {
        self.post_json(
            "otp/sms/send",
            &PhonePayload { phone },
            AuthErrorKind::SendCode,
        )
        .await?;
        Ok(())
    }

    async fn verify_sms_code(&self, code: &str) -> AuthResult<()> {
        self.post_json(
            "otp/sms/verify",
            &CodePayload { code },
            AuthErrorKind::VerifyCode,
        )
        .await?;
        Ok(())
    }

    async fn start_oauth(&self, provider: OAuthProvider) -> AuthResult<()> {
        let response = self
            .post_json(
                "oauth/init",
                &OAuthInitPayload {
                    provider: provider.id(),
                },
                AuthErrorKind::OAuth,
            )
            .await?;
        let init: OAuthInitResponse = response
            .json()
            .await
            .map_err(|e| AuthError::new(AuthErrorKind::OAuth, e.to_string()))?;

        if std::env::var(NO_BROWSER_ENV).is_err() {
            tracing::info!(provider = provider.id(), "opening browser for OAuth");
            let _ = open::that(&init.authorization_url);
        }

        self.wait_oauth_result(&init.nonce).await
    }

    async fn start_passkey_login(&self) -> AuthResult<()> {
        self.post_json("passkey/login", &serde_json::json!({}), AuthErrorKind::Passkey)
            .await?;
        Ok(())
    }

    async fn current_user(&self) -> AuthResult<Option<AuthUser>> {
        let url = self.endpoint("user")?;
        let response = self
            .identify(self.http.get(url))
            .send()
            .await
            .map_err(|e| AuthError::transport(&e))?;
        // No session reads as "nobody signed in", not as a failure.
        if response.status() == StatusCode::UNAUTHORIZED
            || response.status() == StatusCode::NO_CONTENT
        {
            return Ok(None);
        }
        let response = Self::check_status(response, AuthErrorKind::Transport).await?;
        let envelope: UserEnvelope = response
            .json()
            .await
            .map_err(|e| AuthError::new(AuthErrorKind::Transport, e.to_string()))?;
        Ok(envelope.user)
    }

    async fn logout(&self) -> AuthResult<()> {
        self.post_json("logout", &serde_json::json!({}), AuthErrorKind::Transport)
            .await?;
        Ok(())
    }
}
