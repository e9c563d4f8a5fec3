//! appicons - multi-platform app icon generator
//!
//! Renders one master SVG into every launcher icon a Flutter-style
//! multi-platform project needs: Android mipmaps, the iOS and macOS asset
//! catalogs, web manifest icons and favicon, the Windows `.ico` resource
//! and the Linux desktop icon.
//!
//! ## Layers
//!
//! - `domain` - icon table, value objects, ports
//! - `application` - the generate use case and per-platform generators
//! - `infrastructure` - resvg rasterizer, ico packer, local file system, NDJSON events
//! - `presentation` - CLI flags, use case factory, summary rendering

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{GenerateOptions, GenerateResult, GenerateUseCase};
pub use config::Config;
pub use domain::value_objects::{Padding, Platform};
pub use error::{AppIconsError, AppIconsResult};
