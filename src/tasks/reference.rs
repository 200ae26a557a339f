use anyhow::Result;

use super::{Context, ProcessOpts, Task, TaskResult, process_resources};
use crate::resources::download::DownloadResource;

/// The reference document download described by `installer.toml`.
#[must_use]
pub fn resource(ctx: &Context) -> DownloadResource {
    let reference = &ctx.installer().reference;
    DownloadResource::new(
        reference.url.clone(),
        ctx.project().resolve(&reference.destination),
        std::sync::Arc::clone(&ctx.downloader),
    )
}

/// Download the hook reference document into the project.
#[derive(Debug)]
pub struct DownloadReference;

impl Task for DownloadReference {
    fn name(&self) -> &'static str {
        "Download reference document"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.profile.extended_integration()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        Ok(
            process_resources(ctx, [resource(ctx)], &ProcessOpts::install_missing("download"))?
                .finish_or_present(ctx),
        )
    }
}
