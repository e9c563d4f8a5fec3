//! Rasterizer Implementations

mod svg;

pub use svg::ResvgRasterizer;
