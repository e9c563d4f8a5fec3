//! Icon Packer Port
//!
//! Packs several PNG renderings of the same icon into one multi-resolution
//! container (the Windows `.ico`).

use thiserror::Error;

use crate::domain::entities::RasterBuffer;

/// Result type for packing
pub type PackResult<T> = Result<T, PackError>;

/// Why packing failed
#[derive(Error, Debug)]
pub enum PackError {
    /// Nothing to pack
    #[error("no images to pack")]
    Empty,

    /// An input buffer is not a PNG the container accepts
    #[error("{size}px image rejected: {message}")]
    InvalidImage { size: u32, message: String },

    /// Image larger than the container format allows
    #[error("{size}px exceeds the {max}px container limit")]
    TooLarge { size: u32, max: u32 },

    /// Writing the container failed
    #[error("container encoding failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Raster-to-container packing
pub trait IconPacker {
    /// Pack `images`, in order, into one container byte sequence
    fn pack(&self, images: &[RasterBuffer]) -> PackResult<Vec<u8>>;
}
