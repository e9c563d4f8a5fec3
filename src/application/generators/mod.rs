//! Platform Generators
//!
//! One generator per platform. Each walks its slice of the icon table and
//! writes through a `PlatformRun`; none depends on another.

mod android;
mod ios;
mod linux;
mod macos;
mod run;
mod web;
mod windows;

pub use android::AndroidGenerator;
pub use ios::IosGenerator;
pub use linux::LinuxGenerator;
pub use macos::MacosGenerator;
pub use run::{GenerationContext, OutputFailure, PlatformReport, PlatformRun};
pub use web::WebGenerator;
pub use windows::WindowsGenerator;

use std::path::Path;

use crate::domain::entities::{AssetCatalog, CatalogImage, IconSpec};
use crate::domain::services::{PlacedIcon, ScaleSet};
use crate::domain::value_objects::Platform;

/// Produces the icon set of one platform
pub trait IconGenerator {
    fn platform(&self) -> Platform;

    /// Write every output of this platform, recording failures in `run`
    fn generate(&self, run: &mut PlatformRun<'_>);
}

/// Get all generators, in generation order
pub fn all_generators() -> Vec<Box<dyn IconGenerator>> {
    Platform::ALL.iter().map(|&p| generator_for(p)).collect()
}

/// Get the generator for a specific platform
pub fn generator_for(platform: Platform) -> Box<dyn IconGenerator> {
    match platform {
        Platform::Android => Box::new(AndroidGenerator),
        Platform::Ios => Box::new(IosGenerator),
        Platform::Web => Box::new(WebGenerator),
        Platform::Macos => Box::new(MacosGenerator),
        Platform::Windows => Box::new(WindowsGenerator),
        Platform::Linux => Box::new(LinuxGenerator),
    }
}

/// Write fixed-name icons, each in its own directory under `base`.
fn write_placed(run: &mut PlatformRun<'_>, base: &Path, icons: &[PlacedIcon]) {
    for icon in icons {
        let dir = base.join(icon.dir);
        run.ensure_dir(&dir);
        let filename = match icon.spec.filename {
            Some(name) => name.to_string(),
            None => format!("icon_{}.png", icon.spec.pixels()),
        };
        run.write_icon(&dir.join(filename), &icon.spec);
    }
}

/// Write an `.appiconset`: every scale of every set, then `Contents.json`
/// listing exactly the images that were written.
fn write_asset_catalog(
    run: &mut PlatformRun<'_>,
    dir: &Path,
    sets: &[ScaleSet],
    filename: fn(&IconSpec) -> String,
) {
    run.ensure_dir(dir);

    let mut catalog = AssetCatalog::new();
    for set in sets {
        for spec in set.specs() {
            let name = filename(&spec);
            if run.write_icon(&dir.join(&name), &spec) {
                catalog.push(CatalogImage::for_spec(&spec, name, set.idiom));
            }
        }
    }

    run.write_manifest(&dir.join("Contents.json"), &catalog);
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_generators_follow_platform_order() {
        let platforms: Vec<Platform> = all_generators().iter().map(|g| g.platform()).collect();
        assert_eq!(platforms, Platform::ALL.to_vec());
    }

    #[test]
    fn generator_for_matches_platform() {
        for platform in Platform::ALL {
            assert_eq!(generator_for(platform).platform(), platform);
        }
    }
}
