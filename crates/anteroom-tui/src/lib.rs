//! Full-screen login TUI for Anteroom.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod mutations;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};
use std::sync::Arc;

use anteroom_core::auth::{AuthCapability, AuthUser};
use anteroom_core::config::Config;
use anyhow::Result;
pub use runtime::LoginRuntime;

/// Runs the interactive login screen.
///
/// Returns the signed-in user, or `None` if the user quit without
/// signing in.
pub async fn run_login(config: &Config, auth: Arc<dyn AuthCapability>) -> Result<Option<AuthUser>> {
    // The login screen draws on stdout; piping it would swallow the
    // alternate-screen escapes.
    if !stdout().is_terminal() {
        anyhow::bail!("Sign-in requires a terminal.");
    }

    let mut runtime = LoginRuntime::new(config, auth)?;
    let outcome = runtime.run()?;

    // Drop restores the terminal before anything is printed.
    drop(runtime);

    if let Some(user) = outcome.as_ref() {
        match user.display_handle() {
            Some(handle) => eprintln!("Signed in as {handle}."),
            None => eprintln!("Signed in."),
        }
    }

    Ok(outcome)
}
