//! Configuration management for anteroom.
//!
//! Loads configuration from ${ANTEROOM_HOME}/config.toml with sensible
//! defaults. Every section is optional; a missing file yields defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Which sign-in methods the screen offers.
///
/// Unavailable methods are still rendered (marked unavailable) but never
/// submit. Defaults match the hosted product: Google, email and SMS on;
/// Apple and passkeys off until enabled per deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MethodsConfig {
    pub google: bool,
    pub apple: bool,
    pub email: bool,
    pub sms: bool,
    pub passkey: bool,
}

impl Default for MethodsConfig {
    fn default() -> Self {
        Self {
            google: true,
            apple: false,
            email: true,
            sms: true,
            passkey: false,
        }
    }
}

/// Identity provider endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Base URL of the hosted auth service.
    pub base_url: String,
    /// Application id registered with the provider; sent on every
    /// request. Empty means the deployment has not set one.
    pub app_id: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://auth.anteroom.dev".to_string(),
            app_id: String::new(),
            timeout_secs: 30,
        }
    }
}

/// Branding shown on the login screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandingConfig {
    pub app_name: String,
    pub tagline: String,
    /// Short feature bullets listed under the tagline.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    /// Line rendered at the bottom of the card; empty hides it.
    pub footer_text: String,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            app_name: "Anteroom".to_string(),
            tagline: "Sign in to continue".to_string(),
            features: Vec::new(),
            footer_text: "Access is restricted to authorized users only".to_string(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderConfig,
    pub methods: MethodsConfig,
    pub branding: BrandingConfig,
}

impl Config {
    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Serializes the effective configuration back to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Writes a default config file at `path`. Fails if one exists.
    pub fn init(path: &Path) -> Result<()> {
        anyhow::ensure!(!path.exists(), "config already exists at {}", path.display());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, Config::default().to_toml()?)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}

pub mod paths {
    //! Path resolution for anteroom configuration and data directories.
    //!
    //! ANTEROOM_HOME resolution order:
    //! 1. ANTEROOM_HOME environment variable (if set)
    //! 2. ~/.config/anteroom (default)

    use std::path::PathBuf;

    /// Returns the anteroom home directory.
    pub fn anteroom_home() -> PathBuf {
        if let Ok(home) = std::env::var("ANTEROOM_HOME") {
            return PathBuf::from(home);
        }

        std::env::home_dir()
            .map(|h| h.join(".config").join("anteroom"))
            .unwrap_or_else(|| PathBuf::from(".anteroom"))
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        anteroom_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        anteroom_home().join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.methods.google);
        assert!(config.methods.email);
        assert!(config.methods.sms);
        assert!(!config.methods.apple);
        assert!(!config.methods.passkey);
        assert_eq!(config.provider.timeout_secs, 30);
        assert!(config.provider.app_id.is_empty());
        assert_eq!(config.branding.app_name, "Anteroom");
        assert_eq!(
            config.branding.footer_text,
            "Access is restricted to authorized users only"
        );
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(config.methods.email);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[provider]\nbase_url = \"http://localhost:9900\"\n\n[methods]\napple = true\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.provider.base_url, "http://localhost:9900");
        assert_eq!(config.provider.timeout_secs, 30);
        assert!(config.methods.apple);
        assert!(config.methods.google);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "provider = [not toml").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_init_refuses_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        Config::init(&path).unwrap();
        assert!(path.exists());
        assert!(Config::init(&path).is_err());
    }

    #[test]
    fn test_roundtrip_toml() {
        let config = Config::default();
        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("base_url"));
        let back: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(back.provider.base_url, config.provider.base_url);
    }
}
