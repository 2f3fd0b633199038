//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_TITLE: &str = "Welcome Back!";
const DEFAULT_MASK_CHAR: char = '•';

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Heading shown above the inputs
    pub title: Option<String>,
    /// Character drawn in place of each password character
    pub mask_char: Option<char>,
    /// Quit as soon as credentials are accepted
    pub exit_on_submit: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "login-tui", "login-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn mask_char(&self) -> char {
        self.mask_char.unwrap_or(DEFAULT_MASK_CHAR)
    }

    pub fn exit_on_submit(&self) -> bool {
        self.exit_on_submit.unwrap_or(true)
    }
}
