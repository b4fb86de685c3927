use crate::error::PromptError;
use crate::result::PromptResult;
use crate::suggest::DEFAULT_DOMAINS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub placeholder: Option<String>,

    #[serde(default)]
    pub domains: Option<Vec<String>>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/mailprompt/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("mailprompt/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("mailprompt\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load the user config, falling back to defaults on any failure.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(config) = Self::load_from(&config_path) {
                    return config;
                }
            }
        }
        Self::default()
    }

    /// Load from an explicit path, reporting parse failures.
    pub fn load_from(path: &Path) -> PromptResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| PromptError::Config(e.to_string()))
    }

    pub fn effective_placeholder(&self) -> &str {
        self.placeholder.as_deref().unwrap_or("")
    }

    pub fn effective_domains(&self) -> Vec<String> {
        match &self.domains {
            Some(domains) => domains.clone(),
            None => DEFAULT_DOMAINS.iter().map(|d| d.to_string()).collect(),
        }
    }
}
