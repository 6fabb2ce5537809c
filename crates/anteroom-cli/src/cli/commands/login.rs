//! Interactive login command.

use std::sync::Arc;

use anteroom_core::auth::AuthCapability;
use anteroom_core::config::Config;
use anyhow::Result;

pub async fn run(config: &Config, auth: Arc<dyn AuthCapability>) -> Result<()> {
    tracing::info!(provider = %config.provider.base_url, "starting interactive sign-in");
    let outcome = anteroom_tui::run_login(config, auth).await?;
    if outcome.is_none() {
        eprintln!("Sign-in cancelled.");
    }
    Ok(())
}
