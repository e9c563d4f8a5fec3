//! Rasterizer Port
//!
//! Turns the master vector image into a square PNG. Plain and maskable
//! icons are one operation with a different `Padding`.

use thiserror::Error;

use crate::domain::entities::{RasterBuffer, VectorSource};
use crate::domain::value_objects::Padding;

/// Result type for rasterization
pub type RasterResult<T> = Result<T, RasterError>;

/// Why a single rasterization request failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// Requested size leaves no pixels for the art
    #[error("invalid icon size {size}px")]
    InvalidSize { size: u32 },

    /// The vector source could not be parsed
    #[error("could not parse vector source: {0}")]
    Parse(String),

    /// The vector source has no drawable extent
    #[error("vector source has an empty canvas")]
    EmptyCanvas,

    /// Pixel buffer could not be allocated
    #[error("could not allocate a {size}x{size} canvas")]
    Allocation { size: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

/// Vector-to-raster conversion
pub trait Rasterizer {
    /// Render `source` into a `size`x`size` PNG.
    ///
    /// The art is fitted inside the square without cropping, centered, over
    /// a transparent background. With a non-zero `padding` the art is
    /// rendered at the inner size and surrounded by a transparent margin.
    fn rasterize(
        &self,
        source: &VectorSource,
        size: u32,
        padding: Padding,
    ) -> RasterResult<RasterBuffer>;
}
