//! iOS `AppIcon.appiconset`

use super::{write_asset_catalog, IconGenerator, PlatformRun};
use crate::domain::services::catalog;
use crate::domain::value_objects::Platform;

pub struct IosGenerator;

impl IconGenerator for IosGenerator {
    fn platform(&self) -> Platform {
        Platform::Ios
    }

    fn generate(&self, run: &mut PlatformRun<'_>) {
        let dir = run.project_root().join(catalog::IOS_ICONSET_DIR);
        write_asset_catalog(run, &dir, &catalog::IOS, catalog::ios_filename);
    }
}
