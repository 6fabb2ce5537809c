//! UI event types consumed by the reducer.

use anteroom_core::auth::{AuthResult, AuthUser, OAuthProvider};
use crossterm::event::Event as CrosstermEvent;

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

/// Results of provider calls, delivered through the inbox.
#[derive(Debug)]
pub enum AuthUiEvent {
    /// Readiness probe finished.
    Ready(AuthResult<()>),
    /// Email code send finished (initial send or resend).
    EmailCodeSent(AuthResult<()>),
    /// SMS code send finished (initial send or resend).
    SmsCodeSent(AuthResult<()>),
    /// Email code verification finished; on success carries the user.
    EmailVerified(AuthResult<Option<AuthUser>>),
    /// SMS code verification finished; on success carries the user.
    SmsVerified(AuthResult<Option<AuthUser>>),
    /// OAuth handshake finished.
    OAuthFinished {
        provider: OAuthProvider,
        result: AuthResult<Option<AuthUser>>,
    },
    /// Passkey ceremony finished.
    PasskeyFinished(AuthResult<Option<AuthUser>>),
}

/// Events processed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Frame tick; drives the spinner and render cadence.
    Tick,
    /// One second of the resend cooldown elapsed.
    CooldownTick,
    /// Raw terminal input.
    Terminal(CrosstermEvent),
    /// A spawned task started.
    TaskStarted { kind: TaskKind, started: TaskStarted },
    /// A spawned task completed; `result` is re-dispatched if the task
    /// is still the active one for its kind.
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },
    /// Provider call result.
    Auth(AuthUiEvent),
}
