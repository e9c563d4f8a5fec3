//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod padding;
mod platform;

pub use padding::{PaddedGeometry, Padding};
pub use platform::Platform;
