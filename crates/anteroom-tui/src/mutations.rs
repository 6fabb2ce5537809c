//! State mutations requested by overlays.
//!
//! Overlay key handlers receive the TUI state immutably; changes they
//! want applied travel back as mutations and the reducer applies them.

use anteroom_core::countries::Country;

#[derive(Debug, Clone, Copy)]
pub enum StateMutation {
    /// Select a country for the phone composer.
    SelectCountry(&'static Country),
}
