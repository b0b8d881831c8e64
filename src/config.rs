//! Configuration handling for the builder

use crate::catalog::{FormType, ToneOption};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default chat-completion model
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Environment variable holding the API key unless overridden
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Timeout the controller imposes on a single generation call
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// User configuration, loaded from `config.json`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Chat-completion model id
    pub model: Option<String>,
    /// API base URL (without the `/chat/completions` suffix)
    pub base_url: Option<String>,
    /// Name of the environment variable holding the API key
    pub api_key_env: Option<String>,
    /// Seconds before a pending generation is abandoned
    pub request_timeout_secs: Option<u64>,
    /// Start with demo mode enabled
    pub demo_mode: Option<bool>,
    /// Initially selected form type (label or id)
    pub default_form_type: Option<String>,
    /// Initially selected tone (label or id)
    pub default_tone: Option<String>,
    /// Directory for exported HTML files
    pub export_dir: Option<PathBuf>,
}

impl AppConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "smartdoc", "smartdoc")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                serde_json::from_str(&content)?
            }
            _ => Self::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(model) = std::env::var("OPENAI_MODEL") {
            if !model.trim().is_empty() {
                self.model = Some(model);
            }
        }
        if let Ok(base_url) = std::env::var("OPENAI_BASE_URL") {
            if !base_url.trim().is_empty() {
                self.base_url = Some(base_url);
            }
        }
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn api_key_env(&self) -> &str {
        self.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV)
    }

    /// Limit on a single generation call; `0` disables it
    pub fn request_timeout(&self) -> Option<Duration> {
        match self.request_timeout_secs.unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS) {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn demo_mode(&self) -> bool {
        self.demo_mode.unwrap_or(false)
    }

    /// Configured starting form type; unknown values fall back to the default
    pub fn form_type(&self) -> FormType {
        self.default_form_type
            .as_deref()
            .and_then(|s| match s.parse() {
                Ok(form_type) => Some(form_type),
                Err(err) => {
                    tracing::warn!("Ignoring default_form_type: {err}");
                    None
                }
            })
            .unwrap_or_default()
    }

    pub fn tone(&self) -> ToneOption {
        self.default_tone
            .as_deref()
            .and_then(|s| match s.parse() {
                Ok(tone) => Some(tone),
                Err(err) => {
                    tracing::warn!("Ignoring default_tone: {err}");
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Export directory: configured, else the user's document dir, else cwd
    pub fn export_dir(&self) -> PathBuf {
        if let Some(dir) = &self.export_dir {
            return dir.clone();
        }
        directories::UserDirs::new()
            .and_then(|dirs| dirs.document_dir().map(|d| d.join("smartdoc")))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
