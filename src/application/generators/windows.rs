//! Windows `.ico` resource packing six in-memory renderings

use super::{IconGenerator, PlatformRun};
use crate::domain::services::catalog;
use crate::domain::value_objects::Platform;

pub struct WindowsGenerator;

impl IconGenerator for WindowsGenerator {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn generate(&self, run: &mut PlatformRun<'_>) {
        let dir = run.project_root().join(catalog::WINDOWS_RESOURCES_DIR);
        run.ensure_dir(&dir);
        let path = dir.join(catalog::WINDOWS_ICON_NAME);

        let buffers: Vec<_> = catalog::WINDOWS
            .iter()
            .filter_map(|&size| run.render_for_container(&path, size))
            .collect();

        run.write_container(&path, &buffers);
    }
}
