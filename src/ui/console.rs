//! Human-readable event sink
//!
//! Progress goes to stdout, per-output failures to stderr. Paths are shown
//! relative to the project root.

use std::path::{Path, PathBuf};

use appicons::domain::ports::{GenerateEvent, GenerateEventSink};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Out(String),
    Err(String),
}

pub struct ConsoleEventSink {
    ui: UiContext,
    project_root: PathBuf,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext, project_root: impl Into<PathBuf>) -> Self {
        Self {
            ui,
            project_root: project_root.into(),
        }
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.ui.color, self.ui.unicode)
    }

    fn display<'a>(&self, path: &'a Path) -> std::path::Display<'a> {
        path.strip_prefix(&self.project_root)
            .unwrap_or(path)
            .display()
    }

    pub fn format(&self, event: &GenerateEvent) -> Option<Line> {
        let verbose = self.ui.verbose > 0;
        match event {
            GenerateEvent::Started {
                project_root,
                source,
                ..
            } => Some(Line::Out(format!(
                "{} Generating app icons\n  Root:   {}\n  Source: {}",
                self.icon(Icon::Generate),
                project_root.display(),
                self.display(source)
            ))),
            GenerateEvent::PlatformStarted { platform } => Some(Line::Out(format!(
                "\n{} {}",
                self.icon(Icon::Progress),
                platform.display_name()
            ))),
            GenerateEvent::FileWritten {
                path, size, bytes, ..
            } => {
                let mut line = format!(
                    "  {} {} ({}px",
                    self.icon(Icon::Success),
                    self.display(path),
                    size
                );
                if verbose {
                    line.push_str(&format!(", {} bytes", bytes));
                }
                line.push(')');
                Some(Line::Out(line))
            }
            GenerateEvent::BufferRendered { size, bytes, .. } if verbose => {
                Some(Line::Out(format!(
                    "  {} rendered {}px ({} bytes)",
                    self.icon(Icon::Arrow),
                    size,
                    bytes
                )))
            }
            GenerateEvent::BufferRendered { .. } => None,
            GenerateEvent::ManifestWritten { path, entries, .. } => {
                let mut line = format!("  {} {}", self.icon(Icon::Success), self.display(path));
                if verbose {
                    line.push_str(&format!(" ({} entries)", entries));
                }
                Some(Line::Out(line))
            }
            GenerateEvent::ContainerWritten { path, images, .. } => {
                let mut line = format!("  {} {}", self.icon(Icon::Success), self.display(path));
                if verbose {
                    line.push_str(&format!(" ({} images)", images));
                }
                Some(Line::Out(line))
            }
            GenerateEvent::OutputFailed {
                path, size, error, ..
            } => {
                let target = match size {
                    Some(size) => format!("{} ({}px)", self.display(path), size),
                    None => self.display(path).to_string(),
                };
                Some(Line::Err(format!(
                    "  {} {}: {}",
                    self.icon(Icon::Error),
                    target,
                    error
                )))
            }
            GenerateEvent::PlatformCompleted { .. } | GenerateEvent::Completed { .. } => None,
        }
    }
}

impl GenerateEventSink for ConsoleEventSink {
    fn on_event(&self, event: GenerateEvent) {
        match self.format(&event) {
            Some(Line::Out(line)) => println!("{}", line),
            Some(Line::Err(line)) => eprintln!("{}", line),
            None => {}
        }
    }
}
