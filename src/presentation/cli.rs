//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap. Invoked with no
//! arguments the tool does a full run from the conventional locations.

use std::path::PathBuf;

use clap::Parser;

use crate::config::ColorMode;
use crate::domain::value_objects::Platform;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(when: ColorWhen) -> Self {
        match when {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// Generate every platform's app icons from one master SVG
#[derive(Parser, Debug)]
#[command(name = "appicons")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Run from a subdirectory of the project (e.g. tool/); the parent directory is the project root."
)]
pub struct Cli {
    /// Project root (defaults to the parent of the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Master SVG (defaults to <root>/assets/app_launcher_icon.svg)
    #[arg(short, long, value_name = "FILE")]
    pub source: Option<PathBuf>,

    /// Only generate these platforms (repeatable or comma separated)
    #[arg(short, long = "platform", value_enum, value_delimiter = ',')]
    pub platforms: Vec<Platform>,

    /// Emit NDJSON events instead of human-readable output
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::try_parse_from(["appicons"]).unwrap();
        assert!(cli.root.is_none());
        assert!(cli.source.is_none());
        assert!(cli.platforms.is_empty());
        assert!(!cli.json);
        assert_eq!(cli.color, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_parse_repeated_platforms() {
        let cli = Cli::try_parse_from(["appicons", "-p", "ios", "--platform", "web"]).unwrap();
        assert_eq!(cli.platforms, vec![Platform::Ios, Platform::Web]);
    }

    #[test]
    fn test_cli_parse_comma_separated_platforms() {
        let cli = Cli::try_parse_from(["appicons", "-p", "android,linux"]).unwrap();
        assert_eq!(cli.platforms, vec![Platform::Android, Platform::Linux]);
    }

    #[test]
    fn test_cli_parse_unknown_platform_is_error() {
        let result = Cli::try_parse_from(["appicons", "-p", "beos"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_root_source_and_output_flags() {
        let cli = Cli::try_parse_from([
            "appicons",
            "--root",
            "/work/app",
            "-s",
            "art/logo.svg",
            "--json",
            "--color",
            "never",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/work/app")));
        assert_eq!(cli.source, Some(PathBuf::from("art/logo.svg")));
        assert!(cli.json);
        assert_eq!(cli.color, Some(ColorWhen::Never));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_color_when_maps_to_color_mode() {
        assert_eq!(ColorMode::from(ColorWhen::Always), ColorMode::Always);
        assert_eq!(ColorMode::from(ColorWhen::Never), ColorMode::Never);
    }
}
