//! ICO Packer
//!
//! Implements the IconPacker port with the `ico` crate.

use crate::domain::entities::RasterBuffer;
use crate::domain::ports::{IconPacker, PackError, PackResult};

/// Largest edge an ICO directory entry can describe
pub const ICO_MAX_SIZE: u32 = 256;

/// Packs PNG buffers into a Windows `.ico`
#[derive(Debug, Clone, Copy, Default)]
pub struct IcoPacker;

impl IcoPacker {
    pub fn new() -> Self {
        Self
    }
}

impl IconPacker for IcoPacker {
    fn pack(&self, images: &[RasterBuffer]) -> PackResult<Vec<u8>> {
        if images.is_empty() {
            return Err(PackError::Empty);
        }

        let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);
        for image in images {
            let size = image.size();
            if size > ICO_MAX_SIZE {
                return Err(PackError::TooLarge {
                    size,
                    max: ICO_MAX_SIZE,
                });
            }

            let decoded =
                ico::IconImage::read_png(image.bytes()).map_err(|e| PackError::InvalidImage {
                    size,
                    message: e.to_string(),
                })?;
            let entry = ico::IconDirEntry::encode(&decoded).map_err(|e| PackError::InvalidImage {
                size,
                message: e.to_string(),
            })?;
            icon_dir.add_entry(entry);
        }

        let mut out = Vec::new();
        icon_dir.write(&mut out)?;
        Ok(out)
    }
}
