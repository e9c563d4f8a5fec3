//! Custom assertion macros and image helpers.
//!
//! These macros provide descriptive failure messages to aid debugging.

use std::path::Path;

use resvg::tiny_skia::Pixmap;

/// List all files in a directory recursively (for debugging)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files
}

/// Decode a PNG file, panicking with the path on failure
pub fn decode_png(path: &Path) -> Pixmap {
    let bytes =
        std::fs::read(path).unwrap_or_else(|e| panic!("cannot read {}: {}", path.display(), e));
    Pixmap::decode_png(&bytes).unwrap_or_else(|e| panic!("{} is not a PNG: {}", path.display(), e))
}

/// Assert that a file was generated at the expected location relative to project root.
///
/// # Example
/// ```ignore
/// assert_generated!(env, "linux/icon.png");
/// ```
#[macro_export]
macro_rules! assert_generated {
    ($env:expr, $path:expr) => {
        let full_path = $env.project_path(&$path);
        assert!(
            full_path.exists(),
            "Expected file at '{}', but it doesn't exist.\n\
             Project root: {:?}\n\
             Files found:\n  {}",
            $path,
            $env.project_root.path(),
            $crate::common::list_all_files($env.project_root.path()).join("\n  ")
        );
    };
}

/// Assert that a file was NOT generated (should not exist).
///
/// # Example
/// ```ignore
/// assert_not_generated!(env, "android/");
/// ```
#[macro_export]
macro_rules! assert_not_generated {
    ($env:expr, $path:expr) => {
        let full_path = $env.project_path(&$path);
        assert!(
            !full_path.exists(),
            "Expected '{}' to NOT exist, but it does.\n\
             Project root: {:?}",
            $path,
            $env.project_root.path()
        );
    };
}
