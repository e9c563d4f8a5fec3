//! Generate Event Port
//!
//! Observable interface for an icon generation run. Sinks turn these into
//! console lines, NDJSON, or nothing.

use std::path::PathBuf;

use crate::domain::value_objects::Platform;

/// Event emitted during icon generation
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateEvent {
    /// Run started
    Started {
        project_root: PathBuf,
        source: PathBuf,
        platforms: Vec<Platform>,
    },

    /// A platform generator started
    PlatformStarted { platform: Platform },

    /// An image file was written
    FileWritten {
        platform: Platform,
        path: PathBuf,
        size: u32,
        bytes: usize,
    },

    /// An image was rendered in memory for a container
    BufferRendered {
        platform: Platform,
        size: u32,
        bytes: usize,
    },

    /// An asset catalog manifest was written
    ManifestWritten {
        platform: Platform,
        path: PathBuf,
        entries: usize,
    },

    /// A multi-resolution container was written
    ContainerWritten {
        platform: Platform,
        path: PathBuf,
        images: usize,
    },

    /// One output failed; the run continues
    OutputFailed {
        platform: Platform,
        path: PathBuf,
        size: Option<u32>,
        error: String,
    },

    /// A platform generator finished
    PlatformCompleted {
        platform: Platform,
        written: usize,
        errors: usize,
    },

    /// Run completed
    Completed { written: usize, errors: usize },
}

/// Trait for receiving generate events
pub trait GenerateEventSink: Send + Sync {
    /// Handle a generate event
    fn on_event(&self, event: GenerateEvent);

    /// Check if this sink wants per-file events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl GenerateEventSink for NoopEventSink {
    fn on_event(&self, _event: GenerateEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
