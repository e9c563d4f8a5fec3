//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::GenerateUseCase;
use crate::infrastructure::{IcoPacker, LocalFs, ResvgRasterizer};

/// Type alias for the concrete GenerateUseCase with all dependencies
pub type ConcreteGenerateUseCase = GenerateUseCase<ResvgRasterizer, IcoPacker, LocalFs>;

/// Create a generate use case with all dependencies wired up
///
/// System fonts are loaded on the first render so SVG `<text>` renders.
pub fn create_generate_use_case() -> ConcreteGenerateUseCase {
    GenerateUseCase::new(ResvgRasterizer::new(), IcoPacker::new(), LocalFs::new())
}
