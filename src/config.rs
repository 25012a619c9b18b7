//! Configuration file support
//!
//! Loads settings from ~/.hilite.conf (or %USERPROFILE%\.hilite.conf on Windows)
//!
//! Format: simple key=value pairs, one per line
//! Lines starting with # are comments
//!
//! Example:
//! ```text
//! # hilite configuration
//! dark-mode = true
//! rules-dir = /home/me/.config/hilite/rules
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::syntax::DisplayMode;

/// Configuration settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Palette used when the command line does not pick one
    pub display_mode: DisplayMode,
    /// Directory of `<ext>.toml` rule files layered over the built-ins
    pub rules_dir: Option<PathBuf>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".hilite.conf"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".hilite.conf"))
        }
    }

    /// Load configuration from file, keeping defaults for anything missing
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Some(path) = Self::config_path() {
            if let Ok(contents) = fs::read_to_string(&path) {
                tracing::debug!("reading config from {}", path.display());
                let settings = Self::parse(&contents);
                config.apply(&settings);
            }
        }

        config
    }

    /// Parse config file contents into key-value pairs
    fn parse(contents: &str) -> HashMap<String, String> {
        let mut settings = HashMap::new();

        for line in contents.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Parse key = value
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_lowercase();
                let value = value.trim().to_string();
                settings.insert(key, value);
            }
        }

        settings
    }

    /// Apply settings from parsed config
    fn apply(&mut self, settings: &HashMap<String, String>) {
        if let Some(value) = settings.get("dark-mode") {
            self.display_mode = DisplayMode::from(parse_bool(value));
        }

        if let Some(value) = settings.get("display-mode") {
            match DisplayMode::from_name(value) {
                Some(mode) => self.display_mode = mode,
                None => tracing::warn!("unknown display-mode {:?} in config", value),
            }
        }

        if let Some(value) = settings.get("rules-dir") {
            if !value.is_empty() {
                self.rules_dir = Some(PathBuf::from(value));
            }
        }
    }
}

/// Parse a boolean value from string
fn parse_bool(s: &str) -> bool {
    let s = s.to_lowercase();
    matches!(s.as_str(), "true" | "yes" | "on" | "1")
}
