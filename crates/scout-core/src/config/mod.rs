//! Configuration management for Scout.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `scout.toml` file
//! 3. User config `~/.config/scout/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

mod defaults;

pub use defaults::*;

use crate::report::{EmojiRule, Section};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// LLM provider configuration.
    pub llm: LLMConfig,

    /// Report prompt and post-processing configuration.
    pub report: ReportConfig,

    /// Local web form configuration.
    pub server: ServerConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./scout.toml` (project local)
    /// 2. `~/.config/scout/config.toml` (user config)
    /// 3. Falls back to defaults
    ///
    /// Environment overrides apply in every case.
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new(DEFAULT_CONFIG_FILE).exists() {
            return Self::from_file(DEFAULT_CONFIG_FILE);
        }

        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Path of the per-user config file, if a config directory exists.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("scout").join("config.toml"))
    }

    /// Apply environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|name| std::env::var(name).ok());
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // LLM overrides
        if let Some(provider) = lookup("SCOUT_LLM_PROVIDER") {
            self.llm.provider = provider;
        }
        if let Some(model) = lookup("SCOUT_LLM_MODEL") {
            self.llm.model = Some(model);
        }
        if let Some(url) = lookup("SCOUT_LLM_BASE_URL") {
            self.llm.base_url = Some(url);
        }
        if let Some(key) = lookup("SCOUT_LLM_API_KEY") {
            self.llm.api_key = Some(key);
        }

        // Report overrides
        if let Some(temperature) = lookup("SCOUT_TEMPERATURE") {
            if let Ok(t) = temperature.parse() {
                self.report.temperature = t;
            }
        }

        // Server overrides
        if let Some(port) = lookup("SCOUT_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
    }

    /// Reject values that would make every request fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.report.sections.is_empty() {
            return Err(ConfigError::Invalid(
                "report.sections must list at least one section".to_string(),
            ));
        }
        if let Some(section) = self.report.sections.iter().find(|s| s.title.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "report section with hint {:?} has an empty title",
                section.hint
            )));
        }
        if !(0.0..=2.0).contains(&self.report.temperature) {
            return Err(ConfigError::Invalid(format!(
                "report.temperature must be between 0.0 and 2.0, got {}",
                self.report.temperature
            )));
        }
        if self.report.concise_max_tokens == 0 || self.report.detailed_max_tokens == 0 {
            return Err(ConfigError::Invalid(
                "report token budgets must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// LLM provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LLMConfig {
    /// Provider name: "openai", "openrouter", or "ollama".
    pub provider: String,

    /// Model name (provider-specific).
    pub model: Option<String>,

    /// Base URL for API (for openai-compatible providers).
    pub base_url: Option<String>,

    /// API key (can also be set via environment variable).
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_LLM_PROVIDER.to_string(),
            model: None,
            base_url: None,
            api_key: None,
        }
    }
}

impl LLMConfig {
    /// Get the model name, falling back to provider defaults.
    pub fn model_or_default(&self) -> String {
        self.model.clone().unwrap_or_else(|| match self.provider.as_str() {
            "ollama" => DEFAULT_OLLAMA_MODEL.to_string(),
            "openrouter" => DEFAULT_OPENROUTER_MODEL.to_string(),
            _ => DEFAULT_OPENAI_MODEL.to_string(),
        })
    }

    /// Get API key from config or environment.
    pub fn api_key_or_env(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("SCOUT_LLM_API_KEY").ok())
            .or_else(|| match self.provider.as_str() {
                "openrouter" => std::env::var("OPENROUTER_API_KEY").ok(),
                _ => std::env::var("OPENAI_API_KEY").ok(),
            })
            .filter(|key| !key.trim().is_empty())
    }
}

/// Report prompt and post-processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// System-role instruction sent with every request.
    pub system_prompt: String,

    /// Sampling temperature.
    pub temperature: f64,

    /// Token budget for concise summaries.
    pub concise_max_tokens: u32,

    /// Token budget for detailed reports.
    pub detailed_max_tokens: u32,

    /// Glyph used when no emoji marker can be taken from the reply.
    pub default_emoji: String,

    /// How the emoji marker is split off the reply.
    pub emoji_rule: EmojiRule,

    /// Ordered sections requested from the model.
    pub sections: Vec<Section>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            concise_max_tokens: DEFAULT_CONCISE_MAX_TOKENS,
            detailed_max_tokens: DEFAULT_DETAILED_MAX_TOKENS,
            default_emoji: DEFAULT_EMOJI.to_string(),
            emoji_rule: EmojiRule::default(),
            sections: Section::defaults(),
        }
    }
}

/// Local web form configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port to listen on.
    pub port: u16,

    /// Whether to open the browser automatically.
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_SERVER_PORT,
            open_browser: true,
        }
    }
}
