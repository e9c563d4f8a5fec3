//! macOS `AppIcon.appiconset`
//!
//! Files are named by pixel size, so 16@2x and 32@1x both land in
//! `app_icon_32.png` (likewise 256 and 512). The later write wins on disk
//! and the manifest keeps both entries pointing at it.

use super::{write_asset_catalog, IconGenerator, PlatformRun};
use crate::domain::services::catalog;
use crate::domain::value_objects::Platform;

pub struct MacosGenerator;

impl IconGenerator for MacosGenerator {
    fn platform(&self) -> Platform {
        Platform::Macos
    }

    fn generate(&self, run: &mut PlatformRun<'_>) {
        let dir = run.project_root().join(catalog::MACOS_ICONSET_DIR);
        write_asset_catalog(run, &dir, &catalog::MACOS, catalog::macos_filename);
    }
}
