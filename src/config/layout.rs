//! Source bundle and destination project paths.
use std::path::{Path, PathBuf};

use super::profiles::SettingsVariant;

/// Hook event the bundled scripts are registered for.
pub const HOOK_EVENT: &str = "UserPromptSubmit";

/// File names of the two hook scripts, in install order.
pub const HOOK_FILES: [&str; 2] = [
    "ultimate-prompt-hook.py",
    "ultimate_prompt_hook_enhanced.py",
];

/// Name of the optional installer settings file at the bundle root.
pub const CONFIG_FILE: &str = "installer.toml";

/// The source tree the installer copies from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    root: PathBuf,
}

impl Bundle {
    /// Wrap a bundle root directory.
    #[must_use]
    pub const fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Bundle root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether `dir` looks like a bundle root.
    #[must_use]
    pub fn is_bundle_root(dir: &Path) -> bool {
        dir.join("hooks").join(HOOK_EVENT).is_dir()
    }

    /// Directory holding the hook scripts.
    #[must_use]
    pub fn hooks_dir(&self) -> PathBuf {
        self.root.join("hooks").join(HOOK_EVENT)
    }

    /// Source paths of the hook scripts.
    #[must_use]
    pub fn hook_files(&self) -> Vec<PathBuf> {
        let dir = self.hooks_dir();
        HOOK_FILES.iter().map(|name| dir.join(name)).collect()
    }

    /// Source path of a settings variant.
    #[must_use]
    pub fn settings_file(&self, variant: SettingsVariant) -> PathBuf {
        let name = match variant {
            SettingsVariant::Standard => "settings.standard.json",
            SettingsVariant::Enhanced => "settings.enhanced.json",
        };
        self.root.join("settings").join(name)
    }

    /// Directory holding optional slash-command files.
    #[must_use]
    pub fn commands_dir(&self) -> PathBuf {
        self.root.join("commands")
    }

    /// Path of the optional `installer.toml`.
    #[must_use]
    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }
}

/// The destination tree inside the target project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// Wrap a project root directory.
    #[must_use]
    pub const fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Project root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The `.claude` configuration directory.
    #[must_use]
    pub fn claude_dir(&self) -> PathBuf {
        self.root.join(".claude")
    }

    /// Destination for hook scripts.
    #[must_use]
    pub fn hooks_dir(&self) -> PathBuf {
        self.claude_dir().join("hooks").join(HOOK_EVENT)
    }

    /// Destination for slash-command files.
    #[must_use]
    pub fn commands_dir(&self) -> PathBuf {
        self.claude_dir().join("commands")
    }

    /// Destination settings file.
    #[must_use]
    pub fn settings_file(&self) -> PathBuf {
        self.claude_dir().join("settings.json")
    }

    /// Directories created before anything is copied, parents first.
    #[must_use]
    pub fn required_dirs(&self) -> Vec<PathBuf> {
        vec![self.claude_dir(), self.hooks_dir(), self.commands_dir()]
    }

    /// Resolve a project-relative path from the installer settings.
    #[must_use]
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }
}
