//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O and codec work.
//!
//! ## Structure
//!
//! - `fs/` - local file system
//! - `rasterizer/` - SVG rendering (resvg)
//! - `packer/` - `.ico` container encoding
//! - `events/` - NDJSON event sink

pub mod events;
pub mod fs;
pub mod packer;
pub mod rasterizer;

// Re-export for convenience
pub use events::JsonEventSink;
pub use fs::LocalFs;
pub use packer::IcoPacker;
pub use rasterizer::ResvgRasterizer;
