//! Generate Result

use crate::application::generators::{OutputFailure, PlatformReport};

/// Result of a generate run
#[derive(Debug, Clone, Default)]
pub struct GenerateResult {
    /// One report per generated platform, in generation order
    pub reports: Vec<PlatformReport>,
}

impl GenerateResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files written across all platforms
    pub fn written_count(&self) -> usize {
        self.reports.iter().map(|r| r.written.len()).sum()
    }

    pub fn error_count(&self) -> usize {
        self.reports.iter().map(|r| r.failures.len()).sum()
    }

    pub fn failures(&self) -> impl Iterator<Item = &OutputFailure> {
        self.reports.iter().flat_map(|r| r.failures.iter())
    }

    pub fn is_success(&self) -> bool {
        self.reports.iter().all(PlatformReport::is_success)
    }
}
