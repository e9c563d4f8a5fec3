//! In-memory port implementations for unit tests

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::entities::{RasterBuffer, VectorSource};
use crate::domain::ports::{
    FileSystem, FsError, FsResult, GenerateEvent, GenerateEventSink, IconPacker, PackError,
    PackResult, RasterError, RasterResult, Rasterizer,
};
use crate::domain::value_objects::Padding;

/// File system that keeps everything in maps.
///
/// Like the real disk, writing into a directory that was never created
/// fails with `NotFound`.
#[derive(Default)]
pub struct MemoryFs {
    files: Mutex<BTreeMap<PathBuf, Vec<u8>>>,
    dirs: Mutex<BTreeSet<PathBuf>>,
    failing_dirs: Vec<PathBuf>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `create_dir_all` fail for `dir`
    pub fn failing_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.failing_dirs.push(dir.into());
        self
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: &[u8]) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.to_vec());
        self
    }

    pub fn files(&self) -> Vec<PathBuf> {
        self.files.lock().unwrap().keys().cloned().collect()
    }

    pub fn contents(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(path).cloned()
    }

    /// Pixel size encoded by `FakeRasterizer` into a written file
    pub fn size_of(&self, path: &Path) -> Option<u32> {
        let bytes = self.contents(path)?;
        FakeRasterizer::decode(&bytes).map(|(size, _)| size)
    }

    /// Padding fraction encoded by `FakeRasterizer` into a written file
    pub fn padding_of(&self, path: &Path) -> Option<f32> {
        let bytes = self.contents(path)?;
        FakeRasterizer::decode(&bytes).map(|(_, fraction)| fraction)
    }
}

impl FileSystem for MemoryFs {
    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        self.contents(path)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        let parent = path.parent().unwrap_or(Path::new(""));
        if !self.dirs.lock().unwrap().contains(parent) {
            return Err(FsError::NotFound(path.to_path_buf()));
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path) || self.dirs.lock().unwrap().contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        if self.failing_dirs.iter().any(|d| path.starts_with(d)) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in path.ancestors() {
            dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }
}

/// Rasterizer that "renders" a text marker instead of pixels
#[derive(Default)]
pub struct FakeRasterizer {
    failing_sizes: Vec<u32>,
    calls: Mutex<Vec<(u32, Padding)>>,
}

impl FakeRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(sizes: &[u32]) -> Self {
        Self {
            failing_sizes: sizes.to_vec(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(u32, Padding)> {
        self.calls.lock().unwrap().clone()
    }

    fn decode(bytes: &[u8]) -> Option<(u32, f32)> {
        let text = std::str::from_utf8(bytes).ok()?;
        let mut parts = text.split(' ');
        if parts.next()? != "png" {
            return None;
        }
        let size = parts.next()?.parse().ok()?;
        let fraction = parts.next()?.parse().ok()?;
        Some((size, fraction))
    }
}

impl Rasterizer for FakeRasterizer {
    fn rasterize(
        &self,
        _source: &VectorSource,
        size: u32,
        padding: Padding,
    ) -> RasterResult<RasterBuffer> {
        self.calls.lock().unwrap().push((size, padding));
        if size == 0 || self.failing_sizes.contains(&size) {
            return Err(RasterError::InvalidSize { size });
        }
        let marker = format!("png {} {}", size, padding.fraction());
        Ok(RasterBuffer::new(size, marker.into_bytes()))
    }
}

/// Packer that lists the packed sizes instead of encoding
#[derive(Default)]
pub struct FakePacker {
    fail: bool,
    packed: Mutex<Vec<Vec<u32>>>,
}

impl FakePacker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Sizes of every `pack` call, in call order
    pub fn packed(&self) -> Vec<Vec<u32>> {
        self.packed.lock().unwrap().clone()
    }
}

impl IconPacker for FakePacker {
    fn pack(&self, images: &[RasterBuffer]) -> PackResult<Vec<u8>> {
        let sizes: Vec<u32> = images.iter().map(RasterBuffer::size).collect();
        self.packed.lock().unwrap().push(sizes.clone());
        if self.fail {
            return Err(PackError::Empty);
        }
        let listed: Vec<String> = sizes.iter().map(u32::to_string).collect();
        Ok(format!("ico {}", listed.join(",")).into_bytes())
    }
}

/// Event sink that records everything
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<GenerateEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<GenerateEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl GenerateEventSink for RecordingSink {
    fn on_event(&self, event: GenerateEvent) {
        self.events.lock().unwrap().push(event);
    }
}
