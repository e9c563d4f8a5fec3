//! Per-platform run state
//!
//! Every generator writes through a `PlatformRun`, which owns the error
//! isolation: a failed directory, render, write or pack is recorded and
//! reported, and the generator moves on to its next output.

use std::path::{Path, PathBuf};

use crate::domain::entities::{AssetCatalog, IconSpec, RasterBuffer, VectorSource};
use crate::domain::ports::{FileSystem, GenerateEvent, GenerateEventSink, IconPacker, Rasterizer};
use crate::domain::value_objects::{Padding, Platform};

/// Everything a generator needs, borrowed for one run
#[derive(Clone, Copy)]
pub struct GenerationContext<'a> {
    pub project_root: &'a Path,
    pub source: &'a VectorSource,
    pub rasterizer: &'a dyn Rasterizer,
    pub packer: &'a dyn IconPacker,
    pub fs: &'a dyn FileSystem,
    pub events: &'a dyn GenerateEventSink,
}

/// One output that could not be produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFailure {
    pub path: PathBuf,
    /// Pixel size of the failed image, when the failure is about one image
    pub size: Option<u32>,
    pub message: String,
}

/// What one platform generator produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformReport {
    pub platform: Platform,
    /// Files written, in write order (repeats when a file is rewritten)
    pub written: Vec<PathBuf>,
    pub failures: Vec<OutputFailure>,
}

impl PlatformReport {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            written: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Error-isolating writer for one platform
pub struct PlatformRun<'a> {
    ctx: GenerationContext<'a>,
    report: PlatformReport,
    attempted_dirs: Vec<PathBuf>,
}

impl<'a> PlatformRun<'a> {
    pub fn new(ctx: GenerationContext<'a>, platform: Platform) -> Self {
        Self {
            ctx,
            report: PlatformReport::new(platform),
            attempted_dirs: Vec::new(),
        }
    }

    pub fn platform(&self) -> Platform {
        self.report.platform
    }

    pub fn project_root(&self) -> &Path {
        self.ctx.project_root
    }

    pub fn finish(self) -> PlatformReport {
        self.report
    }

    /// Create `dir` and its parents once per run.
    ///
    /// Returns false if creation failed; the failure is already recorded.
    pub fn ensure_dir(&mut self, dir: &Path) -> bool {
        if self.attempted_dirs.iter().any(|d| d == dir) {
            return !self.report.failures.iter().any(|f| f.path == dir);
        }
        self.attempted_dirs.push(dir.to_path_buf());

        match self.ctx.fs.create_dir_all(dir) {
            Ok(()) => true,
            Err(e) => {
                self.fail(dir, None, format!("could not create directory: {e}"));
                false
            }
        }
    }

    /// Render `spec` and write it as a PNG at `path`.
    pub fn write_icon(&mut self, path: &Path, spec: &IconSpec) -> bool {
        let size = spec.pixels();
        let Some(buffer) = self.render(path, size, spec.padding) else {
            return false;
        };

        match self.ctx.fs.write(path, buffer.bytes()) {
            Ok(()) => {
                self.written(path);
                if self.ctx.events.wants_detailed_events() {
                    self.ctx.events.on_event(GenerateEvent::FileWritten {
                        platform: self.platform(),
                        path: path.to_path_buf(),
                        size,
                        bytes: buffer.len(),
                    });
                }
                true
            }
            Err(e) => {
                self.fail(path, Some(size), format!("write failed: {e}"));
                false
            }
        }
    }

    /// Render a `size` PNG in memory for the container at `container`.
    pub fn render_for_container(&mut self, container: &Path, size: u32) -> Option<RasterBuffer> {
        let buffer = self.render(container, size, Padding::NONE)?;
        if self.ctx.events.wants_detailed_events() {
            self.ctx.events.on_event(GenerateEvent::BufferRendered {
                platform: self.platform(),
                size,
                bytes: buffer.len(),
            });
        }
        Some(buffer)
    }

    /// Pack `buffers` and write the container at `path`.
    pub fn write_container(&mut self, path: &Path, buffers: &[RasterBuffer]) -> bool {
        let packed = match self.ctx.packer.pack(buffers) {
            Ok(bytes) => bytes,
            Err(e) => {
                self.fail(path, None, format!("packing failed: {e}"));
                return false;
            }
        };
        if !self.write_index(path, &packed) {
            return false;
        }
        self.ctx.events.on_event(GenerateEvent::ContainerWritten {
            platform: self.platform(),
            path: path.to_path_buf(),
            images: buffers.len(),
        });
        true
    }

    /// Serialize `catalog` and write it at `path`.
    pub fn write_manifest(&mut self, path: &Path, catalog: &AssetCatalog) -> bool {
        let json = match catalog.to_json_pretty() {
            Ok(json) => json,
            Err(e) => {
                self.fail(path, None, format!("manifest serialization failed: {e}"));
                return false;
            }
        };
        if !self.write_index(path, json.as_bytes()) {
            return false;
        }
        self.ctx.events.on_event(GenerateEvent::ManifestWritten {
            platform: self.platform(),
            path: path.to_path_buf(),
            entries: catalog.len(),
        });
        true
    }

    fn write_index(&mut self, path: &Path, bytes: &[u8]) -> bool {
        match self.ctx.fs.write(path, bytes) {
            Ok(()) => {
                self.written(path);
                true
            }
            Err(e) => {
                self.fail(path, None, format!("write failed: {e}"));
                false
            }
        }
    }

    fn render(&mut self, path: &Path, size: u32, padding: Padding) -> Option<RasterBuffer> {
        match self.ctx.rasterizer.rasterize(self.ctx.source, size, padding) {
            Ok(buffer) => Some(buffer),
            Err(e) => {
                self.fail(path, Some(size), e.to_string());
                None
            }
        }
    }

    fn written(&mut self, path: &Path) {
        self.report.written.push(path.to_path_buf());
    }

    fn fail(&mut self, path: &Path, size: Option<u32>, message: String) {
        self.ctx.events.on_event(GenerateEvent::OutputFailed {
            platform: self.platform(),
            path: path.to_path_buf(),
            size,
            error: message.clone(),
        });
        self.report.failures.push(OutputFailure {
            path: path.to_path_buf(),
            size,
            message,
        });
    }
}
