//! Configuration management for EduLearn.
//!
//! Loads configuration from ${EDULEARN_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for EduLearn configuration and data directories.
    //!
    //! EDULEARN_HOME resolution order:
    //! 1. EDULEARN_HOME environment variable (if set)
    //! 2. ~/.config/edulearn (default)
    //! 3. ./.edulearn when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the EduLearn home directory.
    pub fn edulearn_home() -> PathBuf {
        if let Ok(home) = std::env::var("EDULEARN_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".edulearn"),
            |h| h.join(".config").join("edulearn"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        edulearn_home().join("config.toml")
    }

    /// Returns the directory rolling log files are written to.
    pub fn logs_dir() -> PathBuf {
        edulearn_home().join("logs")
    }
}

/// Settings for the built-in mock identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockAuthConfig {
    /// The only email accepted by sign-in.
    pub email: String,
    /// The only password accepted by sign-in.
    pub password: String,
    /// Identity id returned by a successful sign-in.
    pub user_id: String,
    /// Display name returned by a successful sign-in.
    pub display_name: String,
    pub sign_in_delay_ms: u64,
    pub sign_up_delay_ms: u64,
    pub sign_out_delay_ms: u64,
    /// Makes sign-out fail with a transport error.
    pub sign_out_fails: bool,
}

impl MockAuthConfig {
    pub fn sign_in_delay(&self) -> Duration {
        Duration::from_millis(self.sign_in_delay_ms)
    }

    pub fn sign_up_delay(&self) -> Duration {
        Duration::from_millis(self.sign_up_delay_ms)
    }

    pub fn sign_out_delay(&self) -> Duration {
        Duration::from_millis(self.sign_out_delay_ms)
    }
}

impl Default for MockAuthConfig {
    fn default() -> Self {
        Self {
            email: "test@test.com".to_string(),
            password: "password".to_string(),
            user_id: "123".to_string(),
            display_name: "John Doe".to_string(),
            sign_in_delay_ms: 1000,
            sign_up_delay_ms: 1000,
            sign_out_delay_ms: 500,
            sign_out_fails: false,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Splash screen duration in milliseconds.
    pub splash_delay_ms: u64,

    /// Optional path to a JSON catalog replacing the built-in sample data.
    pub catalog_file: Option<String>,

    /// Log level used when EDULEARN_LOG is unset.
    pub log_level: String,

    /// Mock identity provider settings.
    pub mock_auth: MockAuthConfig,
}

impl Config {
    const DEFAULT_SPLASH_DELAY_MS: u64 = 2000;
    const DEFAULT_LOG_LEVEL: &str = "info";

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
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

    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
    }

    /// Creates a default config file at the given path.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            splash_delay_ms: Self::DEFAULT_SPLASH_DELAY_MS,
            catalog_file: None,
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
            mock_auth: MockAuthConfig::default(),
        }
    }
}
