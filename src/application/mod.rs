//! Application Layer
//!
//! Use cases that orchestrate the generation flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT touch pixels or the disk directly (ports do)
//!
//! ## Use Cases
//!
//! - `GenerateUseCase` - Reads the master SVG and runs every platform generator
//!
//! ## Generators
//!
//! - `IconGenerator` - One implementation per platform, driven through `PlatformRun`

pub mod generate;
pub mod generators;

#[cfg(test)]
mod fakes;

pub use generate::{GenerateOptions, GenerateResult, GenerateUseCase, DEFAULT_SOURCE};
pub use generators::{
    all_generators, generator_for, IconGenerator, OutputFailure, PlatformReport,
};
