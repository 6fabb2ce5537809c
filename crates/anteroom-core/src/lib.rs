//! Core domain for anteroom: country data, phone composition, the auth
//! capability seam, and configuration.
//!
//! Everything here is UI-agnostic. The TUI crate consumes these types and
//! the CLI wires them together.

pub mod auth;
pub mod config;
pub mod countries;
pub mod phone;
