use anyhow::Result;

use super::{Context, ProcessOpts, Task, TaskResult, process_resources};
use crate::resources::file_copy::FileCopyResource;

/// The settings variant for the selected profile, copied to
/// `.claude/settings.json`.
#[must_use]
pub fn resource(ctx: &Context) -> FileCopyResource {
    FileCopyResource::new(
        ctx.bundle().settings_file(ctx.profile.settings_variant()),
        ctx.project().settings_file(),
    )
}

/// Install the settings file, replacing whatever is there.
#[derive(Debug)]
pub struct InstallSettings;

impl Task for InstallSettings {
    fn name(&self) -> &'static str {
        "Install settings"
    }

    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    fn critical(&self) -> bool {
        true
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let variant = ctx.profile.settings_variant();
        ctx.log.debug(&format!("using {variant:?} settings"));
        Ok(process_resources(ctx, [resource(ctx)], &ProcessOpts::apply_all("install"))?.finish(ctx))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::profiles::{Profile, SettingsVariant};
    use crate::tasks::test_helpers::{context, fixture};

    fn installed_matches(profile: Profile, variant: SettingsVariant) {
        let fx = fixture();
        let ctx = context(&fx, profile);
        InstallSettings.run(&ctx).unwrap();
        assert_eq!(
            std::fs::read(ctx.project().settings_file()).unwrap(),
            std::fs::read(ctx.bundle().settings_file(variant)).unwrap()
        );
    }

    #[test]
    fn standard_gets_standard_variant() {
        installed_matches(Profile::Standard, SettingsVariant::Standard);
    }

    #[test]
    fn enhanced_and_full_get_enhanced_variant() {
        installed_matches(Profile::Enhanced, SettingsVariant::Enhanced);
        installed_matches(Profile::Full, SettingsVariant::Enhanced);
    }

    #[test]
    fn existing_settings_are_overwritten() {
        let fx = fixture();
        let ctx = context(&fx, Profile::Standard);
        std::fs::create_dir_all(ctx.project().claude_dir()).unwrap();
        std::fs::write(ctx.project().settings_file(), "{\"user\": true}").unwrap();
        InstallSettings.run(&ctx).unwrap();
        assert_eq!(
            std::fs::read(ctx.project().settings_file()).unwrap(),
            std::fs::read(ctx.bundle().settings_file(SettingsVariant::Standard)).unwrap()
        );
    }
}
