//! Profile selection: interactive menu or a pre-selected choice.
use anyhow::{Context as _, Result};
use std::io::{BufRead, Write};

use crate::config::profiles::Profile;
use crate::error::InstallError;

/// Source of the profile choice for a run.
pub trait ChoiceProvider {
    /// Produce the profile to install.
    ///
    /// # Errors
    ///
    /// Returns [`InstallError::InvalidChoice`] for anything other than the
    /// menu keys, or an I/O error if input cannot be read.
    fn choose(&mut self) -> Result<Profile>;
}

/// Prints the menu and reads a single line.
///
/// There is no retry loop: the first answer decides.
#[derive(Debug)]
pub struct InteractivePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InteractivePrompt<R, W> {
    /// Create a prompt over the given reader and writer.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl InteractivePrompt<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Prompt on the process's standard streams.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

/// Render the selection menu.
#[must_use]
pub fn render_menu() -> String {
    let mut menu = String::from("Select an installation profile:\n");
    for profile in Profile::ALL {
        menu.push_str(&format!("  {}) {}\n", profile.key(), profile.description()));
    }
    menu.push_str("Choice [1-3]: ");
    menu
}

impl<R: BufRead, W: Write> ChoiceProvider for InteractivePrompt<R, W> {
    fn choose(&mut self) -> Result<Profile> {
        self.output
            .write_all(render_menu().as_bytes())
            .and_then(|()| self.output.flush())
            .context("writing menu")?;

        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("reading profile choice")?;
        Ok(Profile::from_choice(&line)?)
    }
}

/// A choice fixed ahead of time (from `--profile`).
#[derive(Debug, Clone)]
pub struct FixedChoice(pub String);

impl ChoiceProvider for FixedChoice {
    fn choose(&mut self) -> Result<Profile> {
        Ok(self.0.parse::<Profile>()?)
    }
}
