//! Platform value object - which application platform an icon set is for

use serde::{Deserialize, Serialize};

/// Application platform that receives a generated icon set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    /// Android launcher mipmaps
    Android,
    /// iOS asset catalog
    #[serde(alias = "iphone")]
    Ios,
    /// Web app manifest icons and favicon
    Web,
    /// macOS asset catalog
    #[serde(alias = "mac")]
    Macos,
    /// Windows `.ico` resource
    Windows,
    /// Linux desktop icon
    Linux,
}

impl Platform {
    /// All platforms, in generation order
    pub const ALL: [Platform; 6] = [
        Platform::Android,
        Platform::Ios,
        Platform::Web,
        Platform::Macos,
        Platform::Windows,
        Platform::Linux,
    ];

    /// Parse a platform name as written in config files and env vars
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "android" => Some(Platform::Android),
            "ios" | "iphone" => Some(Platform::Ios),
            "web" => Some(Platform::Web),
            "macos" | "mac" | "osx" => Some(Platform::Macos),
            "windows" | "win" => Some(Platform::Windows),
            "linux" => Some(Platform::Linux),
            _ => None,
        }
    }

    /// Stable machine name (used in JSON events)
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Web => "web",
            Platform::Macos => "macos",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
        }
    }

    /// Get a human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Android => "Android",
            Platform::Ios => "iOS",
            Platform::Web => "Web",
            Platform::Macos => "macOS",
            Platform::Windows => "Windows",
            Platform::Linux => "Linux",
        }
    }

    /// Sort a platform selection into generation order and drop duplicates
    pub fn in_generation_order(selected: &[Platform]) -> Vec<Platform> {
        Self::ALL
            .iter()
            .copied()
            .filter(|p| selected.contains(p))
            .collect()
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
