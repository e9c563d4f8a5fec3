//! Android launcher icons: one `ic_launcher.png` per density bucket

use super::{write_placed, IconGenerator, PlatformRun};
use crate::domain::services::catalog;
use crate::domain::value_objects::Platform;

pub struct AndroidGenerator;

impl IconGenerator for AndroidGenerator {
    fn platform(&self) -> Platform {
        Platform::Android
    }

    fn generate(&self, run: &mut PlatformRun<'_>) {
        let res = run.project_root().join(catalog::ANDROID_RES_DIR);
        write_placed(run, &res, &catalog::ANDROID);
    }
}
