//! Session command handlers (whoami, logout).

use anteroom_core::auth::AuthCapability;
use anyhow::{Context, Result};

pub async fn whoami(auth: &dyn AuthCapability) -> Result<()> {
    let user = auth.current_user().await.context("fetch current user")?;
    match user {
        Some(user) => {
            match user.display_handle() {
                Some(handle) => println!("Signed in as {handle}"),
                None => println!("Signed in"),
            }
            if let Some(id) = user.id.as_deref() {
                println!("Account id: {id}");
            }
        }
        None => println!("Not signed in."),
    }
    Ok(())
}

pub async fn logout(auth: &dyn AuthCapability) -> Result<()> {
    auth.logout().await.context("clear session")?;
    println!("Signed out.");
    Ok(())
}
