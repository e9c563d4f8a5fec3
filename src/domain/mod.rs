//! Domain Layer
//!
//! Pure icon-generation logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - IconSpec, AssetCatalog, raster payloads
//! - `value_objects/` - Platform, Padding
//! - `services/` - the static icon table
//! - `ports/` - Rasterizer, IconPacker, FileSystem, event sink
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Plain data** - Platform tables are `const` records, not types
//! 3. **Ports & Adapters** - Image codecs and disk access go through traits

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
