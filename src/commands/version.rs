//! Command: print version information.

/// The build version (release tag, `git describe`, or the crate version).
#[must_use]
pub fn version() -> &'static str {
    option_env!("PROMPT_HOOKS_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Print the installer version to stdout.
pub fn run() {
    println!("prompt-hooks {}", version());
}
