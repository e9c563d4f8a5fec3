//! JSON Event Sink
//!
//! Outputs generate events as NDJSON for CI/automation consumption.

use crate::domain::ports::{GenerateEvent, GenerateEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// Render one event as its NDJSON object
pub fn event_to_json(event: &GenerateEvent) -> serde_json::Value {
    match event {
        GenerateEvent::Started {
            project_root,
            source,
            platforms,
        } => {
            let platforms: Vec<&str> = platforms.iter().map(|p| p.name()).collect();
            serde_json::json!({
                "event": "start",
                "command": "generate",
                "project_root": project_root.display().to_string(),
                "source": source.display().to_string(),
                "platforms": platforms,
            })
        }

        GenerateEvent::PlatformStarted { platform } => serde_json::json!({
            "event": "platform_start",
            "platform": platform.name(),
        }),

        GenerateEvent::FileWritten {
            platform,
            path,
            size,
            bytes,
        } => serde_json::json!({
            "event": "item_written",
            "platform": platform.name(),
            "path": path.display().to_string(),
            "size": size,
            "bytes": bytes,
        }),

        GenerateEvent::BufferRendered {
            platform,
            size,
            bytes,
        } => serde_json::json!({
            "event": "item_rendered",
            "platform": platform.name(),
            "size": size,
            "bytes": bytes,
        }),

        GenerateEvent::ManifestWritten {
            platform,
            path,
            entries,
        } => serde_json::json!({
            "event": "manifest_written",
            "platform": platform.name(),
            "path": path.display().to_string(),
            "entries": entries,
        }),

        GenerateEvent::ContainerWritten {
            platform,
            path,
            images,
        } => serde_json::json!({
            "event": "container_written",
            "platform": platform.name(),
            "path": path.display().to_string(),
            "images": images,
        }),

        GenerateEvent::OutputFailed {
            platform,
            path,
            size,
            error,
        } => serde_json::json!({
            "event": "item_error",
            "platform": platform.name(),
            "path": path.display().to_string(),
            "size": size,
            "error": error,
        }),

        GenerateEvent::PlatformCompleted {
            platform,
            written,
            errors,
        } => serde_json::json!({
            "event": "platform_complete",
            "platform": platform.name(),
            "written": written,
            "errors": errors,
        }),

        GenerateEvent::Completed { written, errors } => {
            let status = if *errors == 0 { "success" } else { "partial" };
            serde_json::json!({
                "event": "complete",
                "command": "generate",
                "status": status,
                "written": written,
                "errors": errors,
            })
        }
    }
}

impl GenerateEventSink for JsonEventSink {
    fn on_event(&self, event: GenerateEvent) {
        self.write_event(event_to_json(&event));
    }
}
