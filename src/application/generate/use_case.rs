//! Generate Use Case
//!
//! Orchestrates one run:
//! 1. Read the master SVG (the only fatal step)
//! 2. Run each selected platform generator in order
//! 3. Collect per-platform reports
//!
//! Failures after step 1 are recorded per output and never stop the run.

use std::sync::Arc;

use crate::application::generators::{generator_for, GenerationContext, PlatformRun};
use crate::domain::entities::VectorSource;
use crate::domain::ports::{
    FileSystem, GenerateEvent, GenerateEventSink, IconPacker, NoopEventSink, Rasterizer,
};
use crate::error::{AppIconsError, AppIconsResult};

use super::options::GenerateOptions;
use super::result::GenerateResult;

/// Generate use case, parameterized by its ports
pub struct GenerateUseCase<R, P, FS>
where
    R: Rasterizer,
    P: IconPacker,
    FS: FileSystem,
{
    rasterizer: R,
    packer: P,
    file_system: FS,
}

impl<R, P, FS> GenerateUseCase<R, P, FS>
where
    R: Rasterizer,
    P: IconPacker,
    FS: FileSystem,
{
    pub fn new(rasterizer: R, packer: P, file_system: FS) -> Self {
        Self {
            rasterizer,
            packer,
            file_system,
        }
    }

    /// Execute the generate use case
    pub fn execute(&self, options: &GenerateOptions) -> AppIconsResult<GenerateResult> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute the generate use case with event reporting
    pub fn execute_with_events(
        &self,
        options: &GenerateOptions,
        event_sink: Arc<dyn GenerateEventSink>,
    ) -> AppIconsResult<GenerateResult> {
        let source = self.load_source(options)?;
        let platforms = options.selected_platforms();

        event_sink.on_event(GenerateEvent::Started {
            project_root: options.project_root.clone(),
            source: options.source.clone(),
            platforms: platforms.clone(),
        });

        let ctx = GenerationContext {
            project_root: &options.project_root,
            source: &source,
            rasterizer: &self.rasterizer,
            packer: &self.packer,
            fs: &self.file_system,
            events: event_sink.as_ref(),
        };

        let mut result = GenerateResult::new();
        for platform in platforms {
            event_sink.on_event(GenerateEvent::PlatformStarted { platform });

            let generator = generator_for(platform);
            let mut run = PlatformRun::new(ctx, platform);
            generator.generate(&mut run);
            let report = run.finish();

            event_sink.on_event(GenerateEvent::PlatformCompleted {
                platform,
                written: report.written.len(),
                errors: report.failures.len(),
            });
            result.reports.push(report);
        }

        event_sink.on_event(GenerateEvent::Completed {
            written: result.written_count(),
            errors: result.error_count(),
        });

        Ok(result)
    }

    fn load_source(&self, options: &GenerateOptions) -> AppIconsResult<VectorSource> {
        let path = &options.source;
        if !self.file_system.exists(path) {
            return Err(AppIconsError::SourceNotFound { path: path.clone() });
        }
        let data = self
            .file_system
            .read(path)
            .map_err(|e| AppIconsError::SourceUnreadable {
                path: path.clone(),
                message: e.to_string(),
            })?;
        Ok(VectorSource::new(path.clone(), data))
    }
}
