//! Engine Configuration - retrieval, cache and rendering knobs as TOML values
//!
//! Each struct implements `Default` with values from `defaults.rs`, so an
//! engine started without a config file needs no tuning.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::defaults;
use crate::context::taxonomy::KeywordMatching;

/// Environment variable holding a config file path.
pub const CONFIG_ENV_VAR: &str = "ECOTOUR_RAG_CONFIG";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "rag_config.toml";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for one engine instance.
///
/// Load with `EngineConfig::load()` which searches:
/// 1. `$ECOTOUR_RAG_CONFIG` env var
/// 2. `./rag_config.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub retrieval: RetrievalConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    /// Preview lengths and theme counts used by the composer
    #[serde(default)]
    pub response: ResponseConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

impl EngineConfig {
    /// Load configuration using the standard search order:
    /// 1. `$ECOTOUR_RAG_CONFIG` environment variable
    /// 2. `./rag_config.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        // 1. Check env var
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded engine config from {}", CONFIG_ENV_VAR);
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from {}, falling back", CONFIG_ENV_VAR);
                    }
                }
            } else {
                warn!(path = %path, "{} points to non-existent file, falling back", CONFIG_ENV_VAR);
            }
        }

        // 2. Check ./rag_config.toml
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded engine config from ./{}", LOCAL_CONFIG_FILE);
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./{}, using defaults", LOCAL_CONFIG_FILE);
                }
            }
        }

        // 3. Defaults
        info!("No {} found, using built-in defaults", LOCAL_CONFIG_FILE);
        Self::default()
    }

    /// Load from a specific TOML file path. Unknown keys are logged, not fatal.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;

        for w in super::validation::validate_unknown_keys(&contents) {
            warn!("{}", w);
        }

        let config: Self = toml::from_str(&contents)
            .map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = self.to_toml()?;
        std::fs::write(path, contents)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        info!(path = %path.display(), "Engine config saved");
        Ok(())
    }

    /// Validate ranges and cross-field consistency.
    ///
    /// Every problem is collected so one run reports them all. Suspicious but
    /// legal values are logged as warnings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (errors, warnings) = super::validation::validate_ranges(self);
        for w in &warnings {
            warn!("{}", w);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
    Serialize(toml::ser::Error),
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Config I/O error ({}): {}", path.display(), e),
            ConfigError::Parse(path, e) => {
                write!(f, "Config parse error ({}): {}", path.display(), e)
            }
            ConfigError::Serialize(e) => write!(f, "Config serialization error: {}", e),
            ConfigError::Validation(errors) => {
                writeln!(f, "Config validation failed:")?;
                for e in errors {
                    writeln!(f, "  - {}", e)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Retrieval
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Documents retrieved per `compose` call
    #[serde(default = "default_top_k")]
    pub default_top_k: usize,

    /// Candidates ranked before `semantic_search` filters apply
    #[serde(default = "default_search_pool_size")]
    pub search_pool_size: usize,

    /// "substring" or "word_prefix"
    #[serde(default)]
    pub keyword_matching: KeywordMatching,

    #[serde(default = "default_boost_per_match")]
    pub boost_per_match: f64,

    #[serde(default = "default_max_category_boost")]
    pub max_category_boost: f64,
}

fn default_top_k() -> usize { defaults::DEFAULT_TOP_K }
fn default_search_pool_size() -> usize { defaults::SEARCH_POOL_SIZE }
fn default_boost_per_match() -> f64 { defaults::BOOST_PER_MATCH }
fn default_max_category_boost() -> f64 { defaults::MAX_CATEGORY_BOOST }

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            default_top_k: default_top_k(),
            search_pool_size: default_search_pool_size(),
            keyword_matching: KeywordMatching::default(),
            boost_per_match: default_boost_per_match(),
            max_category_boost: default_max_category_boost(),
        }
    }
}

// ============================================================================
// Cache
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,

    /// Capacity of each cache (retrieval, response, topic lookup)
    #[serde(default = "default_cache_max_entries")]
    pub max_entries: u64,

    #[serde(default = "default_cache_ttl")]
    pub ttl_seconds: u64,
}

fn default_cache_enabled() -> bool { true }
fn default_cache_max_entries() -> u64 { defaults::CACHE_MAX_ENTRIES }
fn default_cache_ttl() -> u64 { defaults::CACHE_TTL_SECS }

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
            max_entries: default_cache_max_entries(),
            ttl_seconds: default_cache_ttl(),
        }
    }
}

// ============================================================================
// Response Rendering
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseConfig {
    #[serde(default = "default_information_preview")]
    pub information_preview_chars: usize,

    #[serde(default = "default_strategy_preview")]
    pub strategy_preview_chars: usize,

    #[serde(default = "default_solution_preview")]
    pub solution_preview_chars: usize,

    #[serde(default = "default_max_key_themes")]
    pub max_key_themes: usize,
}

fn default_information_preview() -> usize { defaults::INFORMATION_PREVIEW_CHARS }
fn default_strategy_preview() -> usize { defaults::STRATEGY_PREVIEW_CHARS }
fn default_solution_preview() -> usize { defaults::SOLUTION_PREVIEW_CHARS }
fn default_max_key_themes() -> usize { defaults::MAX_KEY_THEMES }

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            information_preview_chars: default_information_preview(),
            strategy_preview_chars: default_strategy_preview(),
            solution_preview_chars: default_solution_preview(),
            max_key_themes: default_max_key_themes(),
        }
    }
}

// ============================================================================
// Server
// ============================================================================

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server bind address.
    ///
    /// Can be overridden by the `--addr` CLI flag.
    #[serde(default = "default_server_addr")]
    pub addr: String,
}

fn default_server_addr() -> String {
    defaults::SERVER_ADDR.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_server_addr(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
