//! Generate Module
//!
//! Runs every selected platform generator against one master SVG.
//!
//! ## Structure
//!
//! - `options` - `GenerateOptions`
//! - `result` - `GenerateResult`
//! - `use_case` - `GenerateUseCase`
//!
//! ## Usage
//!
//! ```ignore
//! use appicons::application::generate::{GenerateOptions, GenerateUseCase};
//!
//! let use_case = GenerateUseCase::new(rasterizer, packer, fs);
//! let result = use_case.execute(&GenerateOptions::new(project_root))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::{GenerateOptions, DEFAULT_SOURCE};
pub use result::GenerateResult;
pub use use_case::GenerateUseCase;
