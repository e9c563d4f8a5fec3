//! Raster and vector payloads passed between the generators and the ports

use std::path::{Path, PathBuf};

/// The master SVG, read once per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorSource {
    path: PathBuf,
    data: Vec<u8>,
}

impl VectorSource {
    pub fn new(path: impl Into<PathBuf>, data: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            data,
        }
    }

    /// Where the SVG was read from (used to resolve relative hrefs)
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// A PNG-encoded square image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    /// Edge length in pixels
    size: u32,
    /// PNG bytes
    bytes: Vec<u8>,
}

impl RasterBuffer {
    pub fn new(size: u32, bytes: Vec<u8>) -> Self {
        Self { size, bytes }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
