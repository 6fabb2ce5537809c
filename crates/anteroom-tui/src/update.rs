//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::{AuthUiEvent, UiEvent};
use crate::features::{login, verify};
use crate::mutations::StateMutation;
use crate::overlays::{CountryPickerState, Overlay, OverlayRequest, OverlayTransition};
use crate::state::{AppState, Readiness, RESEND_COOLDOWN_SECS, Screen, TuiState};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns
/// effects for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::CooldownTick => {
            if app.tui.cooldown > 0 {
                app.tui.cooldown -= 1;
            }
            if app.tui.cooldown == 0 {
                vec![UiEffect::CancelCooldown]
            } else {
                vec![]
            }
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, &term_event),
        UiEvent::TaskStarted { kind, started } => {
            app.tui.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            if app.tui.tasks.state_mut(kind).finish_if_active(completed.id) {
                update(app, *completed.result)
            } else {
                // A newer task of this kind superseded it; drop the result.
                vec![]
            }
        }
        UiEvent::Auth(auth_event) => handle_auth_event(&mut app.tui, auth_event),
    }
}

fn handle_terminal_event(app: &mut AppState, event: &Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, *key),
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Ctrl+C quits from anywhere except an open overlay (which closes).
    let ctrl_c =
        key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl_c && app.overlay.is_none() {
        return vec![UiEffect::Quit];
    }

    if let Some(overlay) = app.overlay.as_mut() {
        let overlay_update = overlay.handle_key(&app.tui, key);
        apply_mutations(&mut app.tui, overlay_update.mutations);
        if matches!(overlay_update.transition, OverlayTransition::Close) {
            app.overlay = None;
        }
        return overlay_update.effects;
    }

    match app.tui.readiness {
        Readiness::Waiting => match key.code {
            KeyCode::Esc => vec![UiEffect::Quit],
            _ => vec![],
        },
        Readiness::Failed => match key.code {
            KeyCode::Esc => vec![UiEffect::Quit],
            KeyCode::Enter | KeyCode::Char('r' | 'R') => {
                app.tui.readiness = Readiness::Waiting;
                app.tui.error = None;
                vec![UiEffect::CheckReady]
            }
            _ => vec![],
        },
        Readiness::Ready => match app.tui.screen {
            Screen::Normal => {
                let (effects, request) = login::handle_key(&mut app.tui, key);
                if let Some(request) = request {
                    open_overlay(app, request);
                }
                effects
            }
            Screen::EmailVerify | Screen::SmsVerify => verify::handle_key(&mut app.tui, key),
        },
    }
}

fn open_overlay(app: &mut AppState, request: OverlayRequest) {
    match request {
        OverlayRequest::CountryPicker => {
            app.overlay = Some(Overlay::CountryPicker(CountryPickerState::open()));
        }
    }
}

fn apply_mutations(tui: &mut TuiState, mutations: Vec<StateMutation>) {
    for mutation in mutations {
        match mutation {
            StateMutation::SelectCountry(country) => tui.phone.select_country(country),
        }
    }
}

fn handle_auth_event(tui: &mut TuiState, event: AuthUiEvent) -> Vec<UiEffect> {
    match event {
        AuthUiEvent::Ready(Ok(())) => {
            tui.readiness = Readiness::Ready;
            vec![]
        }
        AuthUiEvent::Ready(Err(err)) => {
            tui.readiness = Readiness::Failed;
            tui.error = Some(format!("Could not reach the sign-in service: {err}"));
            vec![]
        }
        AuthUiEvent::EmailCodeSent(Ok(())) => {
            tui.screen = Screen::EmailVerify;
            tui.cooldown = RESEND_COOLDOWN_SECS;
            vec![UiEffect::StartCooldown]
        }
        AuthUiEvent::EmailCodeSent(Err(_)) => {
            tui.error = Some(login::EMAIL_SEND_ERROR.to_string());
            vec![]
        }
        AuthUiEvent::SmsCodeSent(Ok(())) => {
            tui.screen = Screen::SmsVerify;
            tui.cooldown = RESEND_COOLDOWN_SECS;
            vec![UiEffect::StartCooldown]
        }
        AuthUiEvent::SmsCodeSent(Err(err)) => {
            // The SMS send path surfaces the provider's own message.
            tui.error = Some(if err.message.is_empty() {
                login::SMS_SEND_FALLBACK.to_string()
            } else {
                err.message
            });
            vec![]
        }
        AuthUiEvent::EmailVerified(Ok(user)) | AuthUiEvent::SmsVerified(Ok(user)) => {
            finish_login(tui, user)
        }
        AuthUiEvent::EmailVerified(Err(_)) | AuthUiEvent::SmsVerified(Err(_)) => {
            tui.error = Some(verify::VERIFY_ERROR.to_string());
            vec![]
        }
        AuthUiEvent::OAuthFinished { result: Ok(user), .. } => finish_login(tui, user),
        AuthUiEvent::OAuthFinished {
            provider,
            result: Err(_),
        } => {
            tui.error = Some(login::oauth_error(provider));
            vec![]
        }
        AuthUiEvent::PasskeyFinished(Ok(user)) => finish_login(tui, user),
        AuthUiEvent::PasskeyFinished(Err(_)) => {
            tui.error = Some(login::PASSKEY_ERROR.to_string());
            vec![]
        }
    }
}

fn finish_login(
    tui: &mut TuiState,
    user: Option<anteroom_core::auth::AuthUser>,
) -> Vec<UiEffect> {
    tui.outcome = Some(user.unwrap_or_default());
    tui.error = None;
    tui.cooldown = 0;
    vec![UiEffect::CancelCooldown, UiEffect::Quit]
}
