//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - The end-of-run text summary
//!
//! ## Structure
//!
//! - `cli` - Command-line flags
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Summary rendering
//!
//! ## Usage
//!
//! ```ignore
//! use appicons::presentation::factory;
//!
//! let use_case = factory::create_generate_use_case();
//! let result = use_case.execute(&options)?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, ColorWhen};
pub use factory::create_generate_use_case;
pub use output::TextRenderer;
