//! Framework install resource.
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use super::{Applicable, Resource, ResourceChange, ResourceState};
use crate::exec::Executor;

/// A framework installed into the project by an external package manager.
///
/// The install is considered present when its directory exists under the
/// project root; the installer itself is never consulted.
#[derive(Debug)]
pub struct FrameworkResource {
    /// Package-manager program (e.g. `npx`).
    pub program: String,
    /// Arguments passed to `program`.
    pub args: Vec<String>,
    /// Directory the install command runs in.
    pub project_root: PathBuf,
    /// Directory whose presence marks the framework as installed.
    pub directory: PathBuf,
    executor: Arc<dyn Executor>,
}

impl FrameworkResource {
    /// Create a new framework resource.
    #[must_use]
    pub fn new(
        program: String,
        args: Vec<String>,
        project_root: PathBuf,
        directory: PathBuf,
        executor: Arc<dyn Executor>,
    ) -> Self {
        Self {
            program,
            args,
            project_root,
            directory,
            executor,
        }
    }

    /// The install command as a single shell-style line.
    #[must_use]
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Applicable for FrameworkResource {
    fn description(&self) -> String {
        self.command_line()
    }

    fn apply(&self) -> Result<ResourceChange> {
        let args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        self.executor
            .run_in(&self.project_root, &self.program, &args)?;
        Ok(ResourceChange::Applied)
    }
}

impl Resource for FrameworkResource {
    fn current_state(&self) -> Result<ResourceState> {
        if self.directory.is_dir() {
            Ok(ResourceState::Correct)
        } else {
            Ok(ResourceState::Missing)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::resources::test_helpers::FakeExecutor;

    fn resource(root: &std::path::Path, executor: Arc<FakeExecutor>) -> FrameworkResource {
        FrameworkResource::new(
            "npx".to_string(),
            vec!["bmad-method".to_string(), "install".to_string()],
            root.to_path_buf(),
            root.join("bmad-core"),
            executor,
        )
    }

    #[test]
    fn present_directory_is_correct() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("bmad-core")).unwrap();
        let executor = Arc::new(FakeExecutor::new());
        let res = resource(dir.path(), Arc::clone(&executor));
        assert_eq!(res.current_state().unwrap(), ResourceState::Correct);
        assert!(executor.calls().is_empty());
    }

    #[test]
    fn apply_runs_install_command() {
        let dir = tempfile::tempdir().unwrap();
        let executor = Arc::new(FakeExecutor::new().respond("npx bmad-method install", true, ""));
        let res = resource(dir.path(), Arc::clone(&executor));
        assert_eq!(res.current_state().unwrap(), ResourceState::Missing);
        assert_eq!(res.apply().unwrap(), ResourceChange::Applied);
        assert_eq!(executor.calls(), ["npx bmad-method install"]);
    }

    #[test]
    fn failing_install_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let executor = Arc::new(FakeExecutor::new().respond("npx bmad-method install", false, ""));
        assert!(resource(dir.path(), executor).apply().is_err());
    }

    #[test]
    fn command_line_joins_args() {
        let dir = tempfile::tempdir().unwrap();
        let res = resource(dir.path(), Arc::new(FakeExecutor::new()));
        assert_eq!(res.command_line(), "npx bmad-method install");
    }
}
