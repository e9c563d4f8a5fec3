//! Padding value object - transparent safe-zone margin around icon art
//!
//! Plain and maskable icons are the same rasterization with a different
//! padding fraction. Maskable icons keep the art inside the central 80%
//! so adaptive masks never clip it.

/// Fraction of the icon edge reserved as transparent margin on each side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding(f32);

/// Margin and inner art size for one icon, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddedGeometry {
    /// Transparent pixels on every edge
    pub margin: u32,
    /// Edge length of the square the art is rendered into
    pub inner: u32,
}

impl Padding {
    /// No margin; art is fitted to the whole square
    pub const NONE: Padding = Padding(0.0);

    /// 10% margin on every edge
    pub const MASKABLE: Padding = Padding(0.1);

    /// Create a padding from a fraction in `[0.0, 0.5)`
    pub fn new(fraction: f32) -> Option<Self> {
        if fraction.is_finite() && (0.0..0.5).contains(&fraction) {
            Some(Padding(fraction))
        } else {
            None
        }
    }

    pub fn fraction(&self) -> f32 {
        self.0
    }

    /// Split a square edge of `size` pixels into margin and inner art size.
    ///
    /// The margin is rounded to the nearest pixel (halves round up). Returns
    /// `None` when nothing is left for the art.
    pub fn geometry(&self, size: u32) -> Option<PaddedGeometry> {
        let margin = (size as f64 * self.0 as f64).round() as u32;
        let inner = size.checked_sub(margin.checked_mul(2)?)?;
        if inner == 0 {
            return None;
        }
        Some(PaddedGeometry { margin, inner })
    }
}

impl Default for Padding {
    fn default() -> Self {
        Padding::NONE
    }
}
