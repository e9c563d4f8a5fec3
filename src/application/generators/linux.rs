//! Linux desktop icon

use super::{write_placed, IconGenerator, PlatformRun};
use crate::domain::services::catalog;
use crate::domain::value_objects::Platform;

pub struct LinuxGenerator;

impl IconGenerator for LinuxGenerator {
    fn platform(&self) -> Platform {
        Platform::Linux
    }

    fn generate(&self, run: &mut PlatformRun<'_>) {
        let dir = run.project_root().join(catalog::LINUX_DIR);
        write_placed(run, &dir, &catalog::LINUX);
    }
}
