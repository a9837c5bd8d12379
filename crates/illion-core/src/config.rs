//! Configuration management for illion generation

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::assemble::{AssemblyMode, ChunkLadder};
use crate::error::ConfigError;

/// Environment variables that override file configuration
pub mod env_vars {
    /// `sequential`, `parallel` or `auto`
    pub const MODE: &str = "ILLION_MODE";
    /// Padded length above which `auto` mode goes parallel
    pub const AUTO_PARALLEL_MIN_LEN: &str = "ILLION_AUTO_PARALLEL_MIN_LEN";
}

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Assembler used by [`IllionGenerator::name`](crate::IllionGenerator::name)
    pub default_mode: AssemblyMode,
    /// Padded digit count above which `auto` mode goes parallel
    pub auto_parallel_min_len: usize,
    /// Chunk size selection for the parallel assembler
    pub ladder: ChunkLadder,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_mode: AssemblyMode::Auto,
            auto_parallel_min_len: 10_000,
            ladder: ChunkLadder::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };

        if !config_path.exists() {
            tracing::debug!("No config at {:?}, using defaults", config_path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {:?}", config_path))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", config_path))?;
        config
            .validate()
            .with_context(|| format!("Invalid config in {:?}", config_path))?;

        tracing::info!("Loaded config from {:?}", config_path);
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<&str>) -> Result<()> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, contents)?;
        tracing::info!("Saved config to {:?}", config_path);
        Ok(())
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("org", "illion", "illion")
            .context("Could not determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ladder.validate()
    }

    /// Apply `ILLION_*` environment overrides on top of this config
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|var| std::env::var(var).ok())
    }

    /// Apply overrides from any variable source (the environment in
    /// production, a map in tests)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(env_vars::MODE) {
            self.default_mode = value.parse().map_err(|_| ConfigError::InvalidEnvValue {
                var: env_vars::MODE,
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(env_vars::AUTO_PARALLEL_MIN_LEN) {
            self.auto_parallel_min_len =
                value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnvValue {
                        var: env_vars::AUTO_PARALLEL_MIN_LEN,
                        value: value.clone(),
                    })?;
        }

        Ok(())
    }
}
