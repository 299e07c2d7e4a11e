//! Configuration management for matinv
//!
//! Supports environment variables, config files, and runtime overrides.
//!
//! Config file location: ~/.config/matinv/config.toml

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::core::error::{MatinvError, Result};

/// Main configuration for matinv
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Numerical tolerances
    #[serde(default)]
    pub numerics: NumericsConfig,
    /// Output formatting
    #[serde(default)]
    pub output: OutputConfig,
}

/// Numerical tolerance configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericsConfig {
    /// Elementwise tolerance for the identity check (default: 1e-8)
    pub tolerance: f64,
    /// Relative pivot cutoff below which a matrix is declared singular
    /// Default: 1e-12
    pub pivot_epsilon: f64,
}

/// Output formatting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Number of decimal places when printing matrices
    pub precision: usize,
    /// Whether to print the verification product and identity check
    pub verify: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            numerics: NumericsConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for NumericsConfig {
    fn default() -> Self {
        Self {
            tolerance: env::var("MATINV_TOLERANCE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1e-8),
            pivot_epsilon: env::var("MATINV_PIVOT_EPSILON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1e-12),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: env::var("MATINV_PRECISION")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(4),
            verify: env::var("MATINV_VERIFY")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(true),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("matinv")
    }

    /// Get the config file path
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, environment, and defaults
    /// Priority: CLI args > env vars > config file > defaults
    pub fn load() -> Self {
        // Try to load .env file if it exists
        let _ = dotenvy::dotenv();

        // Config file first (defaults fill in missing sections), then any
        // MATINV_* env vars on top
        let mut config = Self::load_from_file().unwrap_or_default();
        config.apply_env_overrides();
        config
    }

    /// Overlay any set MATINV_* environment variables onto this config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(tolerance) = var("MATINV_TOLERANCE").and_then(|v| v.parse().ok()) {
            self.numerics.tolerance = tolerance;
        }
        if let Some(epsilon) = var("MATINV_PIVOT_EPSILON").and_then(|v| v.parse().ok()) {
            self.numerics.pivot_epsilon = epsilon;
        }
        if let Some(precision) = var("MATINV_PRECISION").and_then(|v| v.parse().ok()) {
            self.output.precision = precision;
        }
        if let Some(verify) = var("MATINV_VERIFY") {
            self.output.verify = verify == "true" || verify == "1";
        }
    }

    /// Load configuration from file only
    pub fn load_from_file() -> Result<Self> {
        let config_path = Self::config_file();

        if !config_path.exists() {
            return Err(MatinvError::config("Config file not found"));
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| MatinvError::config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| MatinvError::config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir();
        let config_path = Self::config_file();

        // Create config directory if it doesn't exist
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .map_err(|e| MatinvError::config(format!("Failed to create config dir: {}", e)))?;
        }

        // Serialize to TOML
        let content = toml::to_string_pretty(self)
            .map_err(|e| MatinvError::config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, content)
            .map_err(|e| MatinvError::config(format!("Failed to write config: {}", e)))?;

        Ok(())
    }
}
