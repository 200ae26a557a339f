use anyhow::Result;

use super::{Context, ProcessOpts, Task, TaskResult, process_resources};
use crate::resources::directory::DirectoryResource;

/// Directories every profile installs into.
#[must_use]
pub fn resources(ctx: &Context) -> Vec<DirectoryResource> {
    ctx.project()
        .required_dirs()
        .into_iter()
        .map(DirectoryResource::new)
        .collect()
}

/// Create `.claude/` and its hook and command directories.
#[derive(Debug)]
pub struct CreateDirectories;

impl Task for CreateDirectories {
    fn name(&self) -> &'static str {
        "Create directories"
    }

    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    fn critical(&self) -> bool {
        true
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        Ok(process_resources(ctx, resources(ctx), &ProcessOpts::apply_all("create"))?.finish(ctx))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::profiles::Profile;
    use crate::tasks::test_helpers::{context, fixture};

    #[test]
    fn creates_all_required_directories() {
        let fx = fixture();
        let ctx = context(&fx, Profile::Standard);
        CreateDirectories.run(&ctx).unwrap();
        for dir in ctx.project().required_dirs() {
            assert!(dir.is_dir(), "{} should exist", dir.display());
        }
    }

    #[test]
    fn second_run_is_noop() {
        let fx = fixture();
        let ctx = context(&fx, Profile::Standard);
        CreateDirectories.run(&ctx).unwrap();
        let marker = ctx.project().hooks_dir().join("keep.txt");
        std::fs::write(&marker, "user file").unwrap();
        assert!(matches!(CreateDirectories.run(&ctx).unwrap(), TaskResult::Ok));
        assert_eq!(std::fs::read_to_string(marker).unwrap(), "user file");
    }

    #[test]
    fn file_blocking_directory_fails() {
        let fx = fixture();
        let ctx = context(&fx, Profile::Standard);
        std::fs::write(ctx.project().claude_dir(), "not a dir").unwrap();
        assert!(CreateDirectories.run(&ctx).is_err());
    }
}
