//! Feature modules: one per screen of the login flow.

pub mod login;
pub mod verify;
