//! Domain Entities
//!
//! - `IconSpec` - one requested raster output
//! - `AssetCatalog` - iOS/macOS `Contents.json` manifest
//! - `VectorSource` / `RasterBuffer` - payloads crossing the ports

mod asset_catalog;
mod icon_spec;
mod raster;

pub use asset_catalog::{AssetCatalog, CatalogImage, CatalogInfo};
pub use icon_spec::IconSpec;
pub use raster::{RasterBuffer, VectorSource};
