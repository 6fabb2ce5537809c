//! OTP verify screens (email and SMS).

mod render;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
pub use render::render;

use crate::effects::UiEffect;
use crate::state::{Screen, TuiState};

/// Verification codes are exactly six digits.
pub const OTP_LEN: usize = 6;

/// Fixed user-facing message for a rejected code, both channels.
pub const VERIFY_ERROR: &str = "Invalid verification code. Please try again.";

/// Which OTP channel the active verify screen belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Email,
    Sms,
}

impl Channel {
    /// Panics on `Screen::Normal`; callers only reach this from a
    /// verify screen.
    pub fn of(screen: Screen) -> Channel {
        match screen {
            Screen::EmailVerify => Channel::Email,
            Screen::SmsVerify => Channel::Sms,
            Screen::Normal => unreachable!("verify channel requested on normal screen"),
        }
    }

    fn otp_mut(self, tui: &mut TuiState) -> &mut String {
        match self {
            Channel::Email => &mut tui.email_otp,
            Channel::Sms => &mut tui.sms_otp,
        }
    }

    pub fn otp(self, tui: &TuiState) -> &str {
        match self {
            Channel::Email => &tui.email_otp,
            Channel::Sms => &tui.sms_otp,
        }
    }

    fn available(self, tui: &TuiState) -> bool {
        match self {
            Channel::Email => tui.methods.email,
            Channel::Sms => tui.methods.sms,
        }
    }

    fn verify_effect(self, code: String) -> UiEffect {
        match self {
            Channel::Email => UiEffect::VerifyEmailCode { code },
            Channel::Sms => UiEffect::VerifySmsCode { code },
        }
    }

    fn resend_effect(self, tui: &TuiState) -> UiEffect {
        match self {
            Channel::Email => UiEffect::SendEmailCode {
                email: tui.email.clone(),
            },
            Channel::Sms => UiEffect::SendSmsCode {
                phone: tui.phone.composed(),
            },
        }
    }
}

/// Key handling for both verify screens.
pub fn handle_key(tui: &mut TuiState, key: KeyEvent) -> Vec<UiEffect> {
    let channel = Channel::of(tui.screen);
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        // Back to the normal screen: the code buffer, error and cooldown
        // all reset so nothing leaks into the next attempt.
        KeyCode::Esc => {
            tui.screen = Screen::Normal;
            channel.otp_mut(tui).clear();
            tui.error = None;
            tui.cooldown = 0;
            vec![UiEffect::CancelCooldown]
        }
        KeyCode::Backspace => {
            if !tui.is_busy() {
                channel.otp_mut(tui).pop();
            }
            vec![]
        }
        KeyCode::Enter => submit_if_complete(tui, channel),
        KeyCode::Char('r' | 'R') if !ctrl => resend(tui, channel),
        KeyCode::Char(c) if !ctrl && c.is_ascii_digit() => {
            if tui.is_busy() || channel.otp(tui).len() >= OTP_LEN {
                return vec![];
            }
            channel.otp_mut(tui).push(c);
            // Auto-submit when the sixth digit lands. Reaching six again
            // requires deleting a digit first, so this fires once per
            // completed entry.
            if channel.otp(tui).len() == OTP_LEN {
                return submit_if_complete(tui, channel);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn submit_if_complete(tui: &mut TuiState, channel: Channel) -> Vec<UiEffect> {
    if channel.otp(tui).len() != OTP_LEN || tui.is_busy() {
        return vec![];
    }
    tui.error = None;
    vec![channel.verify_effect(channel.otp(tui).to_string())]
}

fn resend(tui: &mut TuiState, channel: Channel) -> Vec<UiEffect> {
    if tui.cooldown > 0 || tui.is_busy() || !channel.available(tui) {
        return vec![];
    }
    tui.error = None;
    vec![channel.resend_effect(tui)]
}
