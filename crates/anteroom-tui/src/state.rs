//! Application state composition.
//!
//! State is split between `TuiState` (non-overlay) and `Option<Overlay>`:
//! overlay handlers can then take `&mut self` and `&TuiState` without
//! borrow conflicts, and the reducer applies their requested mutations.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── readiness / screen / active_tab   (where the user is)
//! │   ├── email / phone / otp buffers       (what they typed)
//! │   ├── cooldown / error                  (verify-screen extras)
//! │   └── tasks / task_seq                  (in-flight provider calls)
//! └── overlay: Option<Overlay>              (country picker)
//! ```

use anteroom_core::auth::AuthUser;
use anteroom_core::config::{BrandingConfig, Config, MethodsConfig};
use anteroom_core::phone::PhoneNumber;

use crate::common::{TaskSeq, Tasks};
use crate::overlays::Overlay;

/// Seconds a resend stays locked after a successful code send.
pub const RESEND_COOLDOWN_SECS: u8 = 30;

/// Provider readiness gate. The login screen proper only renders once
/// the provider answered the readiness probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Waiting,
    Ready,
    Failed,
}

/// The three method tabs on the normal screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Quick,
    Email,
    Phone,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Quick, Tab::Email, Tab::Phone]
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Quick => "Quick",
            Tab::Email => "Email",
            Tab::Phone => "Phone",
        }
    }

    pub fn next(self) -> Tab {
        match self {
            Tab::Quick => Tab::Email,
            Tab::Email => Tab::Phone,
            Tab::Phone => Tab::Quick,
        }
    }

    pub fn prev(self) -> Tab {
        match self {
            Tab::Quick => Tab::Phone,
            Tab::Email => Tab::Quick,
            Tab::Phone => Tab::Email,
        }
    }
}

/// Which screen is showing. A single enum instead of two booleans so the
/// email and SMS verify screens can never be visible at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Normal,
    EmailVerify,
    SmsVerify,
}

/// Selectable entries on the Quick tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickMethod {
    Google,
    Apple,
    Passkey,
}

impl QuickMethod {
    pub fn all() -> &'static [QuickMethod] {
        &[QuickMethod::Google, QuickMethod::Apple, QuickMethod::Passkey]
    }

    pub fn label(self) -> &'static str {
        match self {
            QuickMethod::Google => "Continue with Google",
            QuickMethod::Apple => "Continue with Apple",
            QuickMethod::Passkey => "Sign in with Passkey",
        }
    }

    pub fn available(self, methods: &MethodsConfig) -> bool {
        match self {
            QuickMethod::Google => methods.google,
            QuickMethod::Apple => methods.apple,
            QuickMethod::Passkey => methods.passkey,
        }
    }
}

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            tui: TuiState::new(config),
            overlay: None,
        }
    }
}

/// Non-overlay UI state.
pub struct TuiState {
    pub should_quit: bool,
    pub readiness: Readiness,
    pub screen: Screen,
    pub active_tab: Tab,
    /// Selected row on the Quick tab.
    pub quick_selected: usize,
    pub email: String,
    pub phone: PhoneNumber,
    pub email_otp: String,
    pub sms_otp: String,
    /// Seconds until a resend is allowed; 0 means allowed.
    pub cooldown: u8,
    /// Last surfaced error; cleared on every new submission.
    pub error: Option<String>,
    pub tasks: Tasks,
    pub task_seq: TaskSeq,
    pub methods: MethodsConfig,
    pub branding: BrandingConfig,
    /// Set on successful sign-in; the runtime returns it to the caller.
    pub outcome: Option<AuthUser>,
    pub spinner_frame: usize,
}

impl TuiState {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            readiness: Readiness::Waiting,
            screen: Screen::Normal,
            active_tab: Tab::Quick,
            quick_selected: 0,
            email: String::new(),
            phone: PhoneNumber::default(),
            email_otp: String::new(),
            sms_otp: String::new(),
            cooldown: 0,
            error: None,
            tasks: Tasks::default(),
            task_seq: TaskSeq::default(),
            methods: config.methods.clone(),
            branding: config.branding.clone(),
            outcome: None,
            spinner_frame: 0,
        }
    }

    /// True while any provider call is in flight. Every submission path
    /// is gated on this, which also guarantees the email and SMS
    /// channels never race each other.
    pub fn is_busy(&self) -> bool {
        self.tasks.is_any_running()
    }
}
