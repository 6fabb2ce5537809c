//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes
//! them.
//!
//! ## Inbox Pattern
//!
//! The runtime uses an "inbox" pattern for async event collection:
//! - Handlers send `UiEvent`s directly to `inbox_tx`
//! - Runtime drains `inbox_rx` each frame to collect results
//! - This eliminates per-operation receivers and simplifies event
//!   collection

mod handlers;

use std::future::Future;
use std::io::Stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anteroom_core::auth::{AuthCapability, AuthUser};
use anteroom_core::config::Config;
use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::common::{TaskCompleted, TaskKind, TaskStarted};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Target frame rate for interactive updates (60fps = ~16ms per frame).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when idle (no task running, no recent input). Longer
/// timeout reduces CPU usage when nothing is happening.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

type UiEventSender = mpsc::UnboundedSender<UiEvent>;
type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;

/// Full-screen login runtime.
///
/// Owns the terminal and state. Runs the event loop and executes
/// effects. Terminal state is restored on drop and on panic.
pub struct LoginRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    auth: Arc<dyn AuthCapability>,
    /// Inbox sender - handlers send events here.
    inbox_tx: UiEventSender,
    /// Inbox receiver - runtime drains this each frame.
    inbox_rx: UiEventReceiver,
    /// Cancels the running cooldown ticker, if any.
    cooldown_cancel: Option<CancellationToken>,
    last_tick: Instant,
    last_terminal_event: Instant,
}

impl LoginRuntime {
    /// Creates a new login runtime. Sets up the terminal; the panic hook
    /// is installed first so a panic mid-setup still restores it.
    pub fn new(config: &Config, auth: Arc<dyn AuthCapability>) -> Result<Self> {
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let state = AppState::new(config);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        let now = Instant::now();
        Ok(Self {
            terminal,
            state,
            auth,
            inbox_tx,
            inbox_rx,
            cooldown_cancel: None,
            last_tick: now,
            last_terminal_event: now,
        })
    }

    /// Runs the event loop until the user signs in or quits.
    ///
    /// Returns the signed-in user, or `None` if the user quit first.
    pub fn run(&mut self) -> Result<Option<AuthUser>> {
        // Kick off the readiness probe before the first frame.
        self.execute_effect(UiEffect::CheckReady);

        let result = self.event_loop();

        if let Some(cancel) = self.cooldown_cancel.take() {
            cancel.cancel();
        }

        result?;
        Ok(self.state.tui.outcome.take())
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.tui.should_quit {
            let events = self.collect_events()?;

            for event in events {
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = Instant::now();
                }

                // Only Tick triggers render - this caps frame rate at
                // tick cadence; input events batch to the next Tick.
                let marks_dirty = matches!(&event, UiEvent::Tick);

                let effects = update::update(&mut self.state, event);
                if marks_dirty {
                    dirty = true;
                }
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Collects events from the terminal and the inbox, then emits a
    /// Tick once its interval elapsed.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Fast polling while a provider call runs, a cooldown ticks, or
        // the user recently typed; slow polling otherwise to save CPU.
        let recent_terminal_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let needs_fast_poll = self.state.tui.tasks.is_any_running()
            || self.state.tui.cooldown > 0
            || recent_terminal_activity;

        let tick_interval = if needs_fast_poll {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Block until the next tick is due unless events are already
        // waiting; keeps input responsive while hitting tick cadence.
        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns a provider call with a uniform TaskStarted/TaskCompleted
    /// lifecycle. Handlers are pure async functions returning `UiEvent`;
    /// the runtime wraps their result in the completion envelope.
    fn spawn_task<F, Fut>(&mut self, kind: TaskKind, f: F)
    where
        F: FnOnce(Arc<dyn AuthCapability>) -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let id = self.state.tui.task_seq.next_id();
        let tx = self.inbox_tx.clone();
        let auth = Arc::clone(&self.auth);

        let started = TaskStarted { id };
        let _ = tx.send(UiEvent::TaskStarted { kind, started });
        tokio::spawn(async move {
            let inner = f(auth).await;
            let completed = TaskCompleted {
                id,
                result: Box::new(inner),
            };
            let _ = tx.send(UiEvent::TaskCompleted { kind, completed });
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }
            UiEffect::CheckReady => {
                self.spawn_task(TaskKind::Ready, handlers::check_ready);
            }
            UiEffect::SendEmailCode { email } => {
                self.spawn_task(TaskKind::SendEmailCode, move |auth| {
                    handlers::send_email_code(auth, email)
                });
            }
            UiEffect::VerifyEmailCode { code } => {
                self.spawn_task(TaskKind::VerifyEmailCode, move |auth| {
                    handlers::verify_email_code(auth, code)
                });
            }
            UiEffect::SendSmsCode { phone } => {
                self.spawn_task(TaskKind::SendSmsCode, move |auth| {
                    handlers::send_sms_code(auth, phone)
                });
            }
            UiEffect::VerifySmsCode { code } => {
                self.spawn_task(TaskKind::VerifySmsCode, move |auth| {
                    handlers::verify_sms_code(auth, code)
                });
            }
            UiEffect::StartOAuth { provider } => {
                self.spawn_task(TaskKind::OAuth, move |auth| {
                    handlers::start_oauth(auth, provider)
                });
            }
            UiEffect::StartPasskey => {
                self.spawn_task(TaskKind::Passkey, handlers::start_passkey);
            }
            UiEffect::StartCooldown => self.start_cooldown_ticker(),
            UiEffect::CancelCooldown => {
                if let Some(cancel) = self.cooldown_cancel.take() {
                    cancel.cancel();
                }
            }
        }
    }

    /// Starts (or restarts) the one-second cooldown ticker. The reducer
    /// owns the countdown number; this just delivers the seconds.
    fn start_cooldown_ticker(&mut self) {
        if let Some(cancel) = self.cooldown_cancel.take() {
            cancel.cancel();
        }
        let cancel = CancellationToken::new();
        self.cooldown_cancel = Some(cancel.clone());

        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            // The first tick of a tokio interval fires immediately.
            interval.tick().await;
            loop {
                tokio::select! {
                    () = cancel.cancelled() => break,
                    _ = interval.tick() => {
                        if tx.send(UiEvent::CooldownTick).is_err() {
                            break;
                        }
                    }
                }
            }
        });
    }
}

impl Drop for LoginRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
