//! Web manifest icons, maskable variants and the favicon

use super::{write_placed, IconGenerator, PlatformRun};
use crate::domain::services::catalog;
use crate::domain::value_objects::Platform;

pub struct WebGenerator;

impl IconGenerator for WebGenerator {
    fn platform(&self) -> Platform {
        Platform::Web
    }

    fn generate(&self, run: &mut PlatformRun<'_>) {
        let web = run.project_root().join(catalog::WEB_DIR);
        write_placed(run, &web, &catalog::WEB);
    }
}
