//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.smoko/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SmokoConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub posts: PostsConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_screen: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PostsConfig {
    pub base_url: Option<String>,
    pub limit: Option<u32>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SCREEN: &str = "counter";
pub const DEFAULT_POSTS_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_POSTS_LIMIT: u32 = 20;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub screen: String,
    pub posts_base_url: String,
    pub posts_limit: u32,
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

/// Returns the path to `~/.smoko/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".smoko").join("config.toml"))
}

/// Load config from `~/.smoko/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SmokoConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SmokoConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SmokoConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SmokoConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: SmokoConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Smoko Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_screen = "counter"         # "counter" or "posts"

# [posts]
# base_url = "https://jsonplaceholder.typicode.com"
# limit = 20                         # how many posts one fetch asks for
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_screen` is from the CLI flag (None = not specified).
pub fn resolve(config: &SmokoConfig, cli_screen: Option<&str>) -> ResolvedConfig {
    // Screen: CLI → env → config → default
    let screen = cli_screen
        .map(|s| s.to_string())
        .or_else(|| std::env::var("SMOKO_SCREEN").ok())
        .or_else(|| config.general.default_screen.clone())
        .unwrap_or_else(|| DEFAULT_SCREEN.to_string());

    // Posts base URL: env → config → default
    let posts_base_url = std::env::var("SMOKO_POSTS_BASE_URL")
        .ok()
        .or_else(|| config.posts.base_url.clone())
        .unwrap_or_else(|| DEFAULT_POSTS_BASE_URL.to_string());

    // Posts limit: env → config → default
    let posts_limit = std::env::var("SMOKO_POSTS_LIMIT")
        .ok()
        .and_then(|raw| match raw.parse() {
            Ok(n) => Some(n),
            Err(_) => {
                warn!("Ignoring unparsable SMOKO_POSTS_LIMIT: {raw:?}");
                None
            }
        })
        .or(config.posts.limit)
        .unwrap_or(DEFAULT_POSTS_LIMIT);

    ResolvedConfig {
        screen,
        posts_base_url,
        posts_limit,
    }
}
