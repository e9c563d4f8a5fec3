//! IconSpec entity - one requested raster output
//!
//! Specs are `const` table data (see `domain::services::catalog`). The
//! builder methods are `const fn` so the tables read declaratively.

use crate::domain::value_objects::Padding;

/// One requested output image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconSpec {
    /// Nominal edge length in points (fractional for some iOS sizes)
    pub points: f32,
    /// Device pixel ratio
    pub scale: u32,
    /// Output filename when the platform uses fixed names
    pub filename: Option<&'static str>,
    /// Safe-zone padding
    pub padding: Padding,
}

impl IconSpec {
    /// A 1x spec with no fixed filename and no padding
    pub const fn new(points: f32) -> Self {
        Self {
            points,
            scale: 1,
            filename: None,
            padding: Padding::NONE,
        }
    }

    pub const fn scaled(self, scale: u32) -> Self {
        Self { scale, ..self }
    }

    pub const fn named(self, filename: &'static str) -> Self {
        Self {
            filename: Some(filename),
            ..self
        }
    }

    pub const fn maskable(self) -> Self {
        Self {
            padding: Padding::MASKABLE,
            ..self
        }
    }

    /// Pixel edge length: `points * scale`, rounded to the nearest pixel
    pub fn pixels(&self) -> u32 {
        (self.points * self.scale as f32).round() as u32
    }

    /// Asset catalog `size` label, e.g. `"83.5x83.5"`
    pub fn size_label(&self) -> String {
        format!("{0}x{0}", self.points)
    }

    /// Asset catalog `scale` label, e.g. `"2x"`
    pub fn scale_label(&self) -> String {
        format!("{}x", self.scale)
    }
}
