use anyhow::Result;

use super::{Context, ProcessOpts, Task, TaskResult, process_resources};
use crate::resources::file_copy::FileCopyResource;

/// Pair each bundled hook script with its destination under
/// `.claude/hooks/UserPromptSubmit/`.
#[must_use]
pub fn resources(ctx: &Context) -> Vec<FileCopyResource> {
    let target_dir = ctx.project().hooks_dir();
    ctx.bundle()
        .hook_files()
        .into_iter()
        .filter_map(|source| {
            let name = source.file_name()?.to_owned();
            Some(FileCopyResource::executable(source, target_dir.join(name)))
        })
        .collect()
}

/// Copy the hook scripts into the project and mark them executable.
#[derive(Debug)]
pub struct InstallHookFiles;

impl Task for InstallHookFiles {
    fn name(&self) -> &'static str {
        "Install hook files"
    }

    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    fn critical(&self) -> bool {
        true
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        Ok(process_resources(ctx, resources(ctx), &ProcessOpts::apply_all("install"))?.finish(ctx))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::config::layout::HOOK_FILES;
    use crate::config::profiles::Profile;
    use crate::resources::error::ResourceError;
    use crate::tasks::test_helpers::{context, fixture};

    #[test]
    fn copies_both_hooks() {
        let fx = fixture();
        let ctx = context(&fx, Profile::Standard);
        InstallHookFiles.run(&ctx).unwrap();
        for name in HOOK_FILES {
            let src = ctx.bundle().hooks_dir().join(name);
            let dst = ctx.project().hooks_dir().join(name);
            assert_eq!(std::fs::read(src).unwrap(), std::fs::read(dst).unwrap());
        }
    }

    #[cfg(unix)]
    #[test]
    fn hooks_are_executable() {
        use std::os::unix::fs::PermissionsExt as _;
        let fx = fixture();
        let ctx = context(&fx, Profile::Standard);
        InstallHookFiles.run(&ctx).unwrap();
        for name in HOOK_FILES {
            let mode = std::fs::metadata(ctx.project().hooks_dir().join(name))
                .unwrap()
                .permissions()
                .mode();
            assert_eq!(mode & 0o111, 0o111, "{name} should be executable");
        }
    }

    #[test]
    fn missing_source_is_source_missing_error() {
        let fx = fixture();
        std::fs::remove_file(fx.bundle_root().join("hooks/UserPromptSubmit").join(HOOK_FILES[1]))
            .unwrap();
        let ctx = context(&fx, Profile::Standard);
        let err = InstallHookFiles.run(&ctx).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ResourceError>(),
            Some(ResourceError::SourceMissing { .. })
        ));
    }
}
