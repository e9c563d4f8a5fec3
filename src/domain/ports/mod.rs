//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod generate_events;
pub mod icon_packer;
pub mod rasterizer;

pub use file_system::{FileSystem, FsError, FsResult};
pub use generate_events::{GenerateEvent, GenerateEventSink, NoopEventSink};
pub use icon_packer::{IconPacker, PackError, PackResult};
pub use rasterizer::{RasterError, RasterResult, Rasterizer};
