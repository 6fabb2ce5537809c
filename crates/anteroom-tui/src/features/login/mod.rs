//! Normal screen: method tabs and their inputs.

mod render;

use anteroom_core::auth::OAuthProvider;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
pub use render::render;

use crate::effects::UiEffect;
use crate::overlays::OverlayRequest;
use crate::state::{QuickMethod, Tab, TuiState};

/// Fixed user-facing message for a failed email code send.
pub const EMAIL_SEND_ERROR: &str =
    "Failed to send verification code. Please check your email and try again.";

/// Fallback when an SMS send fails without a provider message.
pub const SMS_SEND_FALLBACK: &str = "Failed to send SMS code.";

/// Fixed user-facing message for a failed passkey ceremony.
pub const PASSKEY_ERROR: &str = "Passkey authentication failed. Please try again.";

/// User-facing message for a failed OAuth handshake.
pub fn oauth_error(provider: OAuthProvider) -> String {
    format!(
        "Failed to sign in with {}. Please try again.",
        provider.display_name()
    )
}

/// Key handling for the normal screen.
///
/// Returns effects plus an optional overlay open request.
pub fn handle_key(tui: &mut TuiState, key: KeyEvent) -> (Vec<UiEffect>, Option<OverlayRequest>) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => (vec![UiEffect::Quit], None),
        KeyCode::Tab => {
            tui.active_tab = tui.active_tab.next();
            (vec![], None)
        }
        KeyCode::BackTab => {
            tui.active_tab = tui.active_tab.prev();
            (vec![], None)
        }
        _ => match tui.active_tab {
            Tab::Quick => (handle_quick_key(tui, key), None),
            Tab::Email => (handle_email_key(tui, key, ctrl), None),
            Tab::Phone => handle_phone_key(tui, key, ctrl),
        },
    }
}

fn handle_quick_key(tui: &mut TuiState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Up => {
            tui.quick_selected = tui.quick_selected.saturating_sub(1);
            vec![]
        }
        KeyCode::Down => {
            tui.quick_selected = (tui.quick_selected + 1).min(QuickMethod::all().len() - 1);
            vec![]
        }
        KeyCode::Enter => {
            let method = QuickMethod::all()[tui.quick_selected];
            // Unavailable methods are shown but never submit.
            if !method.available(&tui.methods) || tui.is_busy() {
                return vec![];
            }
            tui.error = None;
            match method {
                QuickMethod::Google => vec![UiEffect::StartOAuth {
                    provider: OAuthProvider::Google,
                }],
                QuickMethod::Apple => vec![UiEffect::StartOAuth {
                    provider: OAuthProvider::Apple,
                }],
                QuickMethod::Passkey => vec![UiEffect::StartPasskey],
            }
        }
        _ => vec![],
    }
}

fn handle_email_key(tui: &mut TuiState, key: KeyEvent, ctrl: bool) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Backspace => {
            tui.email.pop();
            vec![]
        }
        KeyCode::Enter => {
            if tui.email.is_empty() || !tui.methods.email || tui.is_busy() {
                return vec![];
            }
            tui.error = None;
            vec![UiEffect::SendEmailCode {
                email: tui.email.clone(),
            }]
        }
        KeyCode::Char(c) if !ctrl && !c.is_control() => {
            tui.email.push(c);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_phone_key(
    tui: &mut TuiState,
    key: KeyEvent,
    ctrl: bool,
) -> (Vec<UiEffect>, Option<OverlayRequest>) {
    match key.code {
        KeyCode::Char('c' | 'C') if !ctrl => (vec![], Some(OverlayRequest::CountryPicker)),
        KeyCode::Backspace => {
            tui.phone.pop_digit();
            (vec![], None)
        }
        KeyCode::Enter => {
            let phone = tui.phone.composed();
            if phone.is_empty() || !tui.methods.sms || tui.is_busy() {
                return (vec![], None);
            }
            tui.error = None;
            (vec![UiEffect::SendSmsCode { phone }], None)
        }
        KeyCode::Char(c) if !ctrl => {
            // Non-digits are dropped by the composer.
            tui.phone.push_digit(c);
            (vec![], None)
        }
        _ => (vec![], None),
    }
}
