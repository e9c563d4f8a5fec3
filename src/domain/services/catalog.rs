//! Icon table - every size, scale and filename each platform needs
//!
//! Pure data. Generators walk these tables; nothing here does I/O.

use crate::domain::entities::IconSpec;

/// An icon placed in a fixed directory under its platform root
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedIcon {
    /// Directory relative to the platform root (`""` for the root itself)
    pub dir: &'static str,
    pub spec: IconSpec,
}

/// A nominal size rendered at several device scales (asset catalogs)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleSet {
    pub points: f32,
    pub scales: &'static [u32],
    pub idiom: &'static str,
    /// Fixed filename; only valid for single-scale sets
    pub filename: Option<&'static str>,
}

impl ScaleSet {
    const fn new(points: f32, scales: &'static [u32], idiom: &'static str) -> Self {
        Self {
            points,
            scales,
            idiom,
            filename: None,
        }
    }

    /// Expand into one spec per scale
    pub fn specs(&self) -> impl Iterator<Item = IconSpec> + '_ {
        self.scales.iter().map(move |&scale| {
            let spec = IconSpec::new(self.points).scaled(scale);
            match self.filename {
                Some(name) => spec.named(name),
                None => spec,
            }
        })
    }
}

pub const ANDROID_RES_DIR: &str = "android/app/src/main/res";
pub const ANDROID_ICON_NAME: &str = "ic_launcher.png";

pub const ANDROID: [PlacedIcon; 5] = [
    PlacedIcon {
        dir: "mipmap-mdpi",
        spec: IconSpec::new(48.0).named(ANDROID_ICON_NAME),
    },
    PlacedIcon {
        dir: "mipmap-hdpi",
        spec: IconSpec::new(72.0).named(ANDROID_ICON_NAME),
    },
    PlacedIcon {
        dir: "mipmap-xhdpi",
        spec: IconSpec::new(96.0).named(ANDROID_ICON_NAME),
    },
    PlacedIcon {
        dir: "mipmap-xxhdpi",
        spec: IconSpec::new(144.0).named(ANDROID_ICON_NAME),
    },
    PlacedIcon {
        dir: "mipmap-xxxhdpi",
        spec: IconSpec::new(192.0).named(ANDROID_ICON_NAME),
    },
];

pub const IOS_ICONSET_DIR: &str = "ios/Runner/Assets.xcassets/AppIcon.appiconset";

pub const IOS: [ScaleSet; 7] = [
    ScaleSet::new(20.0, &[1, 2, 3], "iphone"),
    ScaleSet::new(29.0, &[1, 2, 3], "iphone"),
    ScaleSet::new(40.0, &[1, 2, 3], "iphone"),
    ScaleSet::new(60.0, &[2, 3], "iphone"),
    ScaleSet::new(76.0, &[1, 2], "iphone"),
    ScaleSet::new(83.5, &[2], "iphone"),
    ScaleSet {
        points: 1024.0,
        scales: &[1],
        idiom: "ios-marketing",
        filename: Some("Icon-App-1024x1024.png"),
    },
];

pub const WEB_DIR: &str = "web";

pub const WEB: [PlacedIcon; 5] = [
    PlacedIcon {
        dir: "icons",
        spec: IconSpec::new(192.0).named("Icon-192.png"),
    },
    PlacedIcon {
        dir: "icons",
        spec: IconSpec::new(512.0).named("Icon-512.png"),
    },
    PlacedIcon {
        dir: "icons",
        spec: IconSpec::new(192.0).named("Icon-maskable-192.png").maskable(),
    },
    PlacedIcon {
        dir: "icons",
        spec: IconSpec::new(512.0).named("Icon-maskable-512.png").maskable(),
    },
    PlacedIcon {
        dir: "",
        spec: IconSpec::new(16.0).named("favicon.png"),
    },
];

pub const MACOS_ICONSET_DIR: &str = "macos/Runner/Assets.xcassets/AppIcon.appiconset";

pub const MACOS: [ScaleSet; 5] = [
    ScaleSet::new(16.0, &[1, 2], "mac"),
    ScaleSet::new(32.0, &[1, 2], "mac"),
    ScaleSet::new(128.0, &[1, 2], "mac"),
    ScaleSet::new(256.0, &[1, 2], "mac"),
    ScaleSet::new(512.0, &[1, 2], "mac"),
];

pub const WINDOWS_RESOURCES_DIR: &str = "windows/runner/resources";
pub const WINDOWS_ICON_NAME: &str = "app_icon.ico";

pub const WINDOWS: [u32; 6] = [16, 32, 48, 64, 128, 256];

pub const LINUX_DIR: &str = "linux";

pub const LINUX: [PlacedIcon; 1] = [PlacedIcon {
    dir: "",
    spec: IconSpec::new(64.0).named("icon.png"),
}];

/// iOS filename for a spec: fixed name, else `Icon-App-<pt>x<pt>@<n>x.png`
pub fn ios_filename(spec: &IconSpec) -> String {
    match spec.filename {
        Some(name) => name.to_string(),
        None => format!("Icon-App-{}@{}x.png", spec.size_label(), spec.scale),
    }
}

/// macOS filename for a spec: `app_icon_<pixels>.png`
pub fn macos_filename(spec: &IconSpec) -> String {
    match spec.filename {
        Some(name) => name.to_string(),
        None => format!("app_icon_{}.png", spec.pixels()),
    }
}
