//! Generate Options

use std::path::{Path, PathBuf};

use crate::domain::value_objects::Platform;

/// Master SVG location, relative to the project root
pub const DEFAULT_SOURCE: &str = "assets/app_launcher_icon.svg";

/// Options for the generate use case
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOptions {
    /// Directory all output paths are relative to
    pub project_root: PathBuf,
    /// Master SVG
    pub source: PathBuf,
    /// Platforms to generate, in any order
    pub platforms: Vec<Platform>,
}

impl GenerateOptions {
    /// All platforms from `<project_root>/assets/app_launcher_icon.svg`
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        Self {
            source: project_root.join(DEFAULT_SOURCE),
            project_root,
            platforms: Platform::ALL.to_vec(),
        }
    }

    /// Use another source; relative paths are resolved against the project root
    pub fn with_source(mut self, source: impl AsRef<Path>) -> Self {
        self.source = self.project_root.join(source);
        self
    }

    pub fn with_platforms(mut self, platforms: impl IntoIterator<Item = Platform>) -> Self {
        self.platforms = platforms.into_iter().collect();
        self
    }

    /// Selected platforms in generation order, without duplicates
    pub fn selected_platforms(&self) -> Vec<Platform> {
        Platform::in_generation_order(&self.platforms)
    }
}
