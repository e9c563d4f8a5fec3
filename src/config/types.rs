//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::DEFAULT_SOURCE;
use crate::domain::value_objects::Platform;
use crate::error::AppIconsResult;

use super::loader::{self, ConfigWarning, LoadedConfig};

/// Source configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SourceConfig {
    /// Master SVG, relative to the project root
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Platform selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlatformsConfig {
    #[serde(default)]
    pub enabled: Vec<Platform>,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub platforms: PlatformsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> AppIconsResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `<project_root>/appicons.toml` if present, then apply env overrides
    pub fn load_or_default(project_root: &Path) -> LoadedConfig {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (APPICONS_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides_from(self, |key| std::env::var(key).ok())
    }

    /// Get enabled platforms (all if empty)
    pub fn enabled_platforms(&self) -> Vec<Platform> {
        if self.platforms.enabled.is_empty() {
            Platform::ALL.to_vec()
        } else {
            self.platforms.enabled.clone()
        }
    }

    /// Source path from config, or the conventional location
    pub fn source_path(&self) -> PathBuf {
        self.source
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE))
    }
}
