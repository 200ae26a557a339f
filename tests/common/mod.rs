// Shared helpers for integration tests.
//
// Provides a temporary bundle + project pair, simulated external tools and
// a recording logger so each integration test can drive whole commands
// without touching the network or spawning processes.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use prompt_hooks_installer::cli::GlobalOpts;
use prompt_hooks_installer::commands::Capabilities;
use prompt_hooks_installer::config::layout::{HOOK_EVENT, HOOK_FILES};
use prompt_hooks_installer::exec::{ExecResult, Executor};
use prompt_hooks_installer::http::Downloader;
use prompt_hooks_installer::logging::{Log, TaskEntry, TaskStatus};

/// A bundle directory and an empty project directory in one temp dir.
pub struct ScriptedBundle {
    /// Backing temporary directory.
    pub root: tempfile::TempDir,
}

impl ScriptedBundle {
    /// Create a complete bundle: both hooks, both settings variants and one
    /// slash command.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        let bundle = Self { root };
        for (i, name) in HOOK_FILES.iter().enumerate() {
            bundle.write(
                &Path::new("hooks").join(HOOK_EVENT).join(name),
                &format!("#!/usr/bin/env python3\n# hook {i}\nimport sys\nsys.exit(0)\n"),
            );
        }
        bundle.write(
            Path::new("settings/settings.standard.json"),
            "{\n  \"hooks\": {\"UserPromptSubmit\": [{\"variant\": \"standard\"}]}\n}\n",
        );
        bundle.write(
            Path::new("settings/settings.enhanced.json"),
            "{\n  \"hooks\": {\"UserPromptSubmit\": [{\"variant\": \"enhanced\"}]}\n}\n",
        );
        bundle.write(
            Path::new("commands/prompt-review.md"),
            "Review the last prompt.\n",
        );
        std::fs::create_dir_all(bundle.project_root()).expect("create project dir");
        bundle
    }

    /// Remove a hook source file from the bundle.
    pub fn without_hook(self, name: &str) -> Self {
        std::fs::remove_file(self.bundle_root().join("hooks").join(HOOK_EVENT).join(name))
            .expect("remove hook source");
        self
    }

    /// Write `installer.toml` into the bundle.
    pub fn with_installer_toml(self, content: &str) -> Self {
        self.write(Path::new("installer.toml"), content);
        self
    }

    fn write(&self, relative: &Path, content: &str) {
        let path = self.bundle_root().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create bundle dir");
        }
        std::fs::write(path, content).expect("write bundle file");
    }

    /// Bundle root.
    pub fn bundle_root(&self) -> PathBuf {
        self.root.path().join("bundle")
    }

    /// Project root.
    pub fn project_root(&self) -> PathBuf {
        self.root.path().join("project")
    }

    /// Global options pointing at this bundle.
    pub fn global(&self) -> GlobalOpts {
        GlobalOpts {
            dry_run: false,
            project: Some(self.project_root()),
            source: Some(self.bundle_root()),
        }
    }

    /// Path of a bundle file.
    pub fn source(&self, relative: &str) -> PathBuf {
        self.bundle_root().join(relative)
    }

    /// Path of a project file.
    pub fn installed(&self, relative: &str) -> PathBuf {
        self.project_root().join(relative)
    }
}

/// Simulates `npx` and `claude`.
///
/// `npx bmad-method install` creates `bmad-core/` in its working directory;
/// `claude mcp add` records a registration that later `claude mcp list`
/// calls report.  Every command line is recorded.
#[derive(Debug, Default)]
pub struct SimulatedTools {
    on_path: HashSet<String>,
    registered: Mutex<Vec<String>>,
    calls: Mutex<Vec<String>>,
}

impl SimulatedTools {
    /// Tools with `programs` available on `PATH`.
    pub fn with_programs(programs: &[&str]) -> Self {
        Self {
            on_path: programs.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }

    /// Every command line executed so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    /// Number of executed command lines starting with `prefix`.
    pub fn count(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }

    fn simulate(&self, dir: Option<&Path>, program: &str, args: &[&str]) -> ExecResult {
        let line = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        self.calls.lock().expect("calls lock").push(line);

        let ok = |stdout: String| ExecResult {
            stdout,
            stderr: String::new(),
            success: true,
            code: Some(0),
        };

        match (program, args) {
            ("npx", ["bmad-method", "install"]) => {
                let dir = dir.expect("framework install runs in the project");
                std::fs::create_dir_all(dir.join("bmad-core")).expect("create framework dir");
                ok(String::new())
            }
            ("claude", ["mcp", "list"]) => {
                let registered = self.registered.lock().expect("registered lock");
                ok(registered
                    .iter()
                    .map(|name| format!("{name}: simulated - ✓ Connected\n"))
                    .collect())
            }
            ("claude", ["mcp", "add", "--transport", _, name, ..])
            | ("claude", ["mcp", "add", name, ..]) => {
                self.registered
                    .lock()
                    .expect("registered lock")
                    .push((*name).to_string());
                ok(String::new())
            }
            _ => ExecResult {
                stdout: String::new(),
                stderr: format!("unknown command: {program}"),
                success: false,
                code: Some(127),
            },
        }
    }

    fn checked(&self, dir: Option<&Path>, program: &str, args: &[&str]) -> anyhow::Result<ExecResult> {
        let result = self.simulate(dir, program, args);
        if result.success {
            Ok(result)
        } else {
            anyhow::bail!("{program} failed: {}", result.stderr)
        }
    }
}

impl Executor for SimulatedTools {
    fn run(&self, program: &str, args: &[&str]) -> anyhow::Result<ExecResult> {
        self.checked(None, program, args)
    }

    fn run_in(&self, dir: &Path, program: &str, args: &[&str]) -> anyhow::Result<ExecResult> {
        self.checked(Some(dir), program, args)
    }

    fn run_unchecked(&self, program: &str, args: &[&str]) -> anyhow::Result<ExecResult> {
        Ok(self.simulate(None, program, args))
    }

    fn which(&self, program: &str) -> bool {
        self.on_path.contains(program)
    }
}

/// A downloader that serves a fixed body and records requested URLs.
#[derive(Debug, Default)]
pub struct RecordingDownloader {
    fail: bool,
    urls: Mutex<Vec<String>>,
}

impl RecordingDownloader {
    /// A downloader whose every fetch fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// URLs fetched so far.
    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().expect("urls lock").clone()
    }
}

impl Downloader for RecordingDownloader {
    fn fetch(&self, url: &str) -> anyhow::Result<Vec<u8>> {
        self.urls.lock().expect("urls lock").push(url.to_string());
        if self.fail {
            anyhow::bail!("GET {url}: connection refused");
        }
        Ok(b"# UserPromptSubmit hook reference\n".to_vec())
    }
}

/// Build [`Capabilities`] from shared test doubles.
pub fn capabilities(tools: &Arc<SimulatedTools>, downloader: &Arc<RecordingDownloader>) -> Capabilities {
    Capabilities {
        executor: Arc::clone(tools) as Arc<dyn Executor>,
        downloader: Arc::clone(downloader) as Arc<dyn Downloader>,
    }
}

/// A [`Log`] that keeps every message so tests can assert on output.
#[derive(Debug, Default)]
pub struct RecordingLog {
    messages: Mutex<Vec<String>>,
    tasks: Mutex<Vec<TaskEntry>>,
}

impl RecordingLog {
    /// Every message logged so far, in order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("messages lock").clone()
    }

    /// Every recorded task, in order.
    pub fn tasks(&self) -> Vec<TaskEntry> {
        self.tasks.lock().expect("tasks lock").clone()
    }

    /// Status recorded for `name`, if the task ran.
    pub fn status_of(&self, name: &str) -> Option<TaskStatus> {
        self.tasks().iter().find(|t| t.name == name).map(|t| t.status)
    }

    fn push(&self, msg: &str) {
        self.messages.lock().expect("messages lock").push(msg.to_string());
    }
}

impl Log for RecordingLog {
    fn stage(&self, msg: &str) {
        self.push(msg);
    }
    fn info(&self, msg: &str) {
        self.push(msg);
    }
    fn debug(&self, msg: &str) {
        self.push(msg);
    }
    fn warn(&self, msg: &str) {
        self.push(msg);
    }
    fn error(&self, msg: &str) {
        self.push(msg);
    }
    fn dry_run(&self, msg: &str) {
        self.push(msg);
    }
    fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>) {
        self.tasks.lock().expect("tasks lock").push(TaskEntry {
            name: name.to_string(),
            status,
            message: message.map(String::from),
        });
    }
}
