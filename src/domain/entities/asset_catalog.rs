//! AssetCatalog entity - the `Contents.json` of an `.appiconset`
//!
//! Entries are pushed only for images that reached the disk, which keeps
//! the manifest and the directory contents in one-to-one agreement.

use serde::{Deserialize, Serialize};

use super::IconSpec;

/// One image variant listed in an asset catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogImage {
    pub filename: String,
    pub idiom: String,
    pub scale: String,
    pub size: String,
}

impl CatalogImage {
    /// Build the catalog record for a generated spec
    pub fn for_spec(spec: &IconSpec, filename: impl Into<String>, idiom: &str) -> Self {
        Self {
            filename: filename.into(),
            idiom: idiom.to_string(),
            scale: spec.scale_label(),
            size: spec.size_label(),
        }
    }
}

/// Catalog provenance block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogInfo {
    pub author: String,
    pub version: u32,
}

impl Default for CatalogInfo {
    fn default() -> Self {
        Self {
            author: "xcode".to_string(),
            version: 1,
        }
    }
}

/// iOS / macOS asset catalog manifest
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssetCatalog {
    images: Vec<CatalogImage>,
    info: CatalogInfo,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, image: CatalogImage) {
        self.images.push(image);
    }

    pub fn images(&self) -> &[CatalogImage] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Serialize the way Xcode writes it (two-space indent)
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
