//! Configuration module for appicons
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (APPICONS_*)
//! 3. Project config (`<root>/appicons.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    project_root, project_root_from, with_env_overrides_from, ConfigWarning, LoadedConfig,
    CONFIG_FILE,
};
pub use types::{ColorMode, Config, OutputConfig, PlatformsConfig, SourceConfig};
