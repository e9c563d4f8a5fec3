//! Domain Services
//!
//! - `catalog` - the static per-platform icon table

pub mod catalog;

pub use catalog::{PlacedIcon, ScaleSet};
