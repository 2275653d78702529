//! Configuration handling for the TUI

use crate::registration::DEFAULT_ENDPOINT;
use crate::state::ErrorRefresh;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configured endpoint
pub const ENDPOINT_ENV: &str = "SIGNUP_ENDPOINT";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Registration endpoint URL
    pub endpoint: Option<String>,
    /// Which error slots are refreshed after an edit
    pub error_refresh: Option<ErrorRefresh>,
    /// Mask the password while typing (on by default)
    pub mask_password: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "signup", "signup-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults when it is missing
    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Endpoint to post to: environment, then config file, then the default
    pub fn resolved_endpoint(&self) -> String {
        self.endpoint_with_override(std::env::var(ENDPOINT_ENV).ok())
    }

    fn endpoint_with_override(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    pub fn error_refresh(&self) -> ErrorRefresh {
        self.error_refresh.unwrap_or_default()
    }

    pub fn mask_password(&self) -> bool {
        self.mask_password.unwrap_or(true)
    }
}
