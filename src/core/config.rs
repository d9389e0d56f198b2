//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.lexitree/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::speech::{DEFAULT_LOCALE, DEFAULT_RATE};
use crate::data::fetcher::{DEFAULT_MAX_ATTEMPTS, RetryPolicy};
use crate::data::loader::{DEFAULT_BEGINNER_BASE_URL, DEFAULT_ESSENTIAL_BASE_URL, Sources};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LexiConfig {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SourcesConfig {
    pub essential_base_url: Option<String>,
    pub beginner_base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NetworkConfig {
    pub max_attempts: Option<u32>,
    pub base_delay_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SpeechConfig {
    pub enabled: Option<bool>,
    pub command: Option<String>,
    pub locale: Option<String>,
    pub rate: Option<f32>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_DELAY_MS: u64 = 1000;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub sources: Sources,
    pub retry: RetryPolicy,
    pub speech_enabled: bool,
    pub speech_command: Option<String>,
    pub speech_locale: String,
    pub speech_rate: f32,
}

/// Values from CLI flags (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub essential_url: Option<String>,
    pub beginner_url: Option<String>,
    pub max_attempts: Option<u32>,
    pub no_speech: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.lexitree/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".lexitree").join("config.toml"))
}

/// Load config from `~/.lexitree/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `LexiConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LexiConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(LexiConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(LexiConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<LexiConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: LexiConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# lexitree configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [sources]
# essential_base_url = "https://assets.4000.uz/assets/en/essential"   # Or LEXITREE_ESSENTIAL_URL
# beginner_base_url = "https://assets.4000.uz/assets/en/beginner"     # Or LEXITREE_BEGINNER_URL

# [network]
# max_attempts = 3          # Tries per resource before giving up
# base_delay_ms = 1000      # Wait after attempt i is base_delay_ms * 2^i

# [speech]
# enabled = true
# command = "espeak-ng"     # Or LEXITREE_TTS_COMMAND; auto-detected when unset
# locale = "en-US"
# rate = 0.8
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &LexiConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Base URLs: CLI → env → config → default
    let essential_base_url = cli
        .essential_url
        .clone()
        .or_else(|| std::env::var("LEXITREE_ESSENTIAL_URL").ok())
        .or_else(|| config.sources.essential_base_url.clone())
        .unwrap_or_else(|| DEFAULT_ESSENTIAL_BASE_URL.to_string());

    let beginner_base_url = cli
        .beginner_url
        .clone()
        .or_else(|| std::env::var("LEXITREE_BEGINNER_URL").ok())
        .or_else(|| config.sources.beginner_base_url.clone())
        .unwrap_or_else(|| DEFAULT_BEGINNER_BASE_URL.to_string());

    let max_attempts = cli
        .max_attempts
        .or(config.network.max_attempts)
        .unwrap_or(DEFAULT_MAX_ATTEMPTS);

    let base_delay = Duration::from_millis(
        config
            .network
            .base_delay_ms
            .unwrap_or(DEFAULT_BASE_DELAY_MS),
    );

    // TTS command: env → config (None = auto-detect)
    let speech_command = std::env::var("LEXITREE_TTS_COMMAND")
        .ok()
        .or_else(|| config.speech.command.clone());

    ResolvedConfig {
        sources: Sources {
            essential_base_url,
            beginner_base_url,
        },
        retry: RetryPolicy::new(max_attempts, base_delay),
        speech_enabled: !cli.no_speech && config.speech.enabled.unwrap_or(true),
        speech_command,
        speech_locale: config
            .speech
            .locale
            .clone()
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
        speech_rate: config.speech.rate.unwrap_or(DEFAULT_RATE),
    }
}
