//! Idempotent resource primitives (check + apply pattern).
pub mod directory;
pub mod download;
pub mod error;
pub mod file_copy;
pub mod framework;
pub mod helpers;
pub mod integration;

use anyhow::Result;

/// Minimal interface for resources that can be described and applied.
pub trait Applicable {
    /// Human-readable description of this resource.
    fn description(&self) -> String;

    /// Apply the resource change.
    ///
    /// Implementations create parent directories as needed and bring the
    /// resource to its desired state.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failures, failed external commands, or
    /// missing required sources.
    fn apply(&self) -> Result<ResourceChange>;
}

/// State of a resource (file, directory, registration, …).
///
/// # Examples
///
/// ```
/// use prompt_hooks_installer::resources::ResourceState;
///
/// let missing = ResourceState::Missing;
/// let wrong = ResourceState::Incorrect { current: "content differs".into() };
///
/// assert_ne!(missing, ResourceState::Correct);
/// assert_ne!(wrong, missing);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceState {
    /// Resource does not exist.
    Missing,
    /// Resource exists and matches the desired state.
    Correct,
    /// Resource exists but does not match the desired state.
    Incorrect {
        /// Description of the current value.
        current: String,
    },
    /// Resource cannot be applied (e.g. a file sits where a directory belongs).
    Invalid {
        /// Reason why the resource cannot be applied.
        reason: String,
    },
}

/// Result of applying a resource change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceChange {
    /// Resource was created or updated.
    Applied,
    /// Resource was already correct (no change needed).
    AlreadyCorrect,
    /// Resource was skipped.
    Skipped {
        /// Reason why the resource was skipped.
        reason: String,
    },
}

/// Resources that can determine their own state.
pub trait Resource: Applicable {
    /// Check the current state of the resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be determined (I/O failure,
    /// failed query command, missing required source).
    fn current_state(&self) -> Result<ResourceState>;

    /// Determine if the resource needs to be changed.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`current_state`](Self::current_state).
    fn needs_change(&self) -> Result<bool> {
        Ok(matches!(
            self.current_state()?,
            ResourceState::Missing | ResourceState::Incorrect { .. }
        ))
    }
}

/// Shared test doubles for resource and task unit tests.
#[cfg(test)]
pub mod test_helpers {
    use crate::exec::{ExecResult, Executor};
    use std::collections::{HashMap, HashSet};
    use std::path::Path;
    use std::sync::Mutex;

    /// An [`Executor`] that answers by full command line.
    ///
    /// Unknown command lines fail.  Every call is recorded (including
    /// `run_in` directories) so tests can assert on what would have run.
    #[derive(Debug, Default)]
    pub struct FakeExecutor {
        responses: HashMap<String, (bool, String)>,
        on_path: HashSet<String>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeExecutor {
        /// Create an executor with no programs on `PATH` and no responses.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Mark `program` as present on `PATH`.
        #[must_use]
        pub fn with_program(mut self, program: &str) -> Self {
            self.on_path.insert(program.to_string());
            self
        }

        /// Answer `command_line` with `(success, stdout)`.
        #[must_use]
        pub fn respond(mut self, command_line: &str, success: bool, stdout: &str) -> Self {
            self.responses
                .insert(command_line.to_string(), (success, stdout.to_string()));
            self
        }

        /// Command lines executed so far.
        #[must_use]
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().map_or_else(|_| vec![], |g| g.clone())
        }

        fn answer(&self, program: &str, args: &[&str]) -> ExecResult {
            let line = std::iter::once(program)
                .chain(args.iter().copied())
                .collect::<Vec<_>>()
                .join(" ");
            if let Ok(mut calls) = self.calls.lock() {
                calls.push(line.clone());
            }
            let (success, stdout) = self
                .responses
                .get(&line)
                .cloned()
                .unwrap_or_else(|| (false, String::new()));
            ExecResult {
                stdout,
                stderr: if success {
                    String::new()
                } else {
                    format!("unexpected call: {line}")
                },
                success,
                code: Some(i32::from(!success)),
            }
        }

        fn checked(&self, program: &str, args: &[&str]) -> anyhow::Result<ExecResult> {
            let result = self.answer(program, args);
            if result.success {
                Ok(result)
            } else {
                anyhow::bail!("{program} failed: {}", result.stderr)
            }
        }
    }

    impl Executor for FakeExecutor {
        fn run(&self, program: &str, args: &[&str]) -> anyhow::Result<ExecResult> {
            self.checked(program, args)
        }

        fn run_in(&self, _: &Path, program: &str, args: &[&str]) -> anyhow::Result<ExecResult> {
            self.checked(program, args)
        }

        fn run_unchecked(&self, program: &str, args: &[&str]) -> anyhow::Result<ExecResult> {
            Ok(self.answer(program, args))
        }

        fn which(&self, program: &str) -> bool {
            self.on_path.contains(program)
        }
    }
}
