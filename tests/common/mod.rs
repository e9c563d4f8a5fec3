//! Common test utilities for appicons CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project in a temp directory, plus helpers to run the CLI
//! - Assertion macros: `assert_generated!`, `assert_not_generated!`
//! - Fixtures: master SVGs and the expected output table

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
