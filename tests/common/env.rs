//! Test environment builder for isolated appicons runs.
//!
//! Provides `TestEnv` - a temp project directory with a `tool/` working
//! directory inside it, mirroring how the generator is normally invoked.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::SQUARE_SVG;

/// Result of running the appicons CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project directory
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_root: TempDir,
    /// Path to the appicons binary
    bin: PathBuf,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// The `tool/` directory the CLI runs from by default
    pub fn tool_dir(&self) -> PathBuf {
        self.project_path("tool")
    }

    /// Run appicons from `<project>/tool`
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from_with_env(&self.tool_dir(), args, &[])
    }

    /// Run appicons from `<project>/tool` with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(&self.tool_dir(), args, env_vars)
    }

    /// Run appicons from a specific directory with extra env vars
    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("APPICONS_ROOT")
            .env_remove("APPICONS_SOURCE")
            .env_remove("APPICONS_PLATFORMS")
            .env_remove("APPICONS_COLOR");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute appicons");

        self.output_to_result(output)
    }

    fn output_to_result(&self, output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Read a generated file's bytes
    pub fn read_bytes(&self, relative_path: &str) -> Vec<u8> {
        let full_path = self.project_path(relative_path);
        std::fs::read(&full_path)
            .unwrap_or_else(|e| panic!("Failed to read generated file {}: {}", relative_path, e))
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    source: Option<String>,
    config: Option<String>,
}

impl TestEnvBuilder {
    /// Square full-bleed source at the conventional location
    pub fn new() -> Self {
        Self {
            source: Some(SQUARE_SVG.to_string()),
            config: None,
        }
    }

    /// Use this SVG as the master icon
    pub fn with_source(mut self, svg: &str) -> Self {
        self.source = Some(svg.to_string());
        self
    }

    /// Do not create `assets/app_launcher_icon.svg`
    pub fn without_source(mut self) -> Self {
        self.source = None;
        self
    }

    /// Write `appicons.toml` at the project root
    pub fn with_config(mut self, toml: &str) -> Self {
        self.config = Some(toml.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let project_root = tempfile::tempdir().expect("Failed to create temp dir");
        let env = TestEnv {
            project_root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_appicons")),
        };

        std::fs::create_dir_all(env.tool_dir()).expect("Failed to create tool dir");
        if let Some(svg) = &self.source {
            env.write_project_file("assets/app_launcher_icon.svg", svg);
        }
        if let Some(toml) = &self.config {
            env.write_project_file("appicons.toml", toml);
        }
        env
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
