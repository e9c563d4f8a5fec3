//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::Platform;
use crate::error::{AppIconsError, AppIconsResult};

use super::types::{ColorMode, Config};

/// Project config file name, looked up in the project root
pub const CONFIG_FILE: &str = "appicons.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Project configuration plus everything worth telling the user about it
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// The config file existed but could not be parsed; defaults were used
    pub error: Option<AppIconsError>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> AppIconsResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AppIconsError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the project config if present, falling back to defaults.
///
/// Env overrides are applied in every case.
pub fn load_or_default(project_root: &Path) -> LoadedConfig {
    let path = project_root.join(CONFIG_FILE);
    let (config, warnings, error) = if path.exists() {
        match load_with_warnings(&path) {
            Ok((config, warnings)) => (config, warnings, None),
            Err(e) => (Config::default(), Vec::new(), Some(e)),
        }
    } else {
        (Config::default(), Vec::new(), None)
    };

    LoadedConfig {
        config: config.with_env_overrides(),
        warnings,
        error,
    }
}

/// Apply environment overrides read through `get_env`
pub fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // APPICONS_SOURCE
    if let Some(source) = get_env("APPICONS_SOURCE").filter(|s| !s.trim().is_empty()) {
        config.source.path = Some(PathBuf::from(source));
    }

    // APPICONS_PLATFORMS (comma-separated)
    if let Some(platforms) = get_env("APPICONS_PLATFORMS") {
        let parsed: Vec<Platform> = platforms.split(',').filter_map(Platform::from_name).collect();
        if !parsed.is_empty() {
            config.platforms.enabled = parsed;
        }
    }

    // APPICONS_COLOR
    if let Some(color) = get_env("APPICONS_COLOR").and_then(|c| ColorMode::from_name(&c)) {
        config.output.color = color;
    }

    config
}

/// Resolve the project root from the working directory.
///
/// See [`project_root_from`].
pub fn project_root(cli_root: Option<&Path>) -> AppIconsResult<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(project_root_from(cli_root, |key| std::env::var(key).ok(), &cwd))
}

/// `--root`, else `APPICONS_ROOT`, else the parent of `cwd`.
///
/// The tool normally runs from a `tool/` or `scripts/` directory one level
/// below the project. A `cwd` with no parent is its own root.
pub fn project_root_from(
    cli_root: Option<&Path>,
    get_env: impl Fn(&str) -> Option<String>,
    cwd: &Path,
) -> PathBuf {
    if let Some(root) = cli_root {
        return root.to_path_buf();
    }
    if let Some(root) = get_env("APPICONS_ROOT").filter(|s| !s.trim().is_empty()) {
        return PathBuf::from(root);
    }
    cwd.parent().unwrap_or(cwd).to_path_buf()
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "source",
        "path",
        "platforms",
        "enabled",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
