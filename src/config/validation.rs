//! Configuration sanity checks reported as warnings at startup.
use std::collections::HashSet;
use std::path::Path;

use super::installer::{InstallerConfig, Transport};
use super::layout::Bundle;
use super::profiles::SettingsVariant;

/// A validation warning detected during configuration loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The configuration source (e.g. `installer.toml`, `settings`).
    pub source: String,
    /// The specific item that triggered the warning.
    pub item: String,
    /// Human-readable warning message.
    pub message: String,
}

impl ValidationWarning {
    /// Create a warning.
    #[must_use]
    pub fn new(
        source: impl Into<String>,
        item: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            item: item.into(),
            message: message.into(),
        }
    }
}

/// Check the installer settings for values that would misbehave at run time.
#[must_use]
pub fn validate_installer(config: &InstallerConfig) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let source = super::layout::CONFIG_FILE;

    if config.framework.program.trim().is_empty() {
        warnings.push(ValidationWarning::new(
            source,
            "framework.program",
            "empty program; the framework step will fail",
        ));
    }
    check_relative(
        &mut warnings,
        "framework.directory",
        &config.framework.directory,
    );
    check_relative(
        &mut warnings,
        "reference.destination",
        &config.reference.destination,
    );
    if !config.reference.url.starts_with("http://") && !config.reference.url.starts_with("https://")
    {
        warnings.push(ValidationWarning::new(
            source,
            "reference.url",
            format!("'{}' is not an http(s) URL", config.reference.url),
        ));
    }

    let mut seen = HashSet::new();
    for integration in &config.integrations {
        if integration.name.trim().is_empty() {
            warnings.push(ValidationWarning::new(
                source,
                "integrations",
                "integration with an empty name",
            ));
            continue;
        }
        if !seen.insert(integration.name.as_str()) {
            warnings.push(ValidationWarning::new(
                source,
                integration.name.as_str(),
                "duplicate integration name",
            ));
        }
        if let Transport::Stdio { command } = &integration.transport
            && command.is_empty()
        {
            warnings.push(ValidationWarning::new(
                source,
                integration.name.as_str(),
                "stdio integration without a command",
            ));
        }
    }

    warnings
}

fn check_relative(warnings: &mut Vec<ValidationWarning>, item: &str, path: &Path) {
    if path.is_absolute() {
        warnings.push(ValidationWarning::new(
            super::layout::CONFIG_FILE,
            item,
            format!(
                "{} is absolute; it will not be resolved against the project",
                path.display()
            ),
        ));
    }
}

/// Check that the settings variants present in the bundle parse as JSON.
///
/// The files are still copied verbatim; this only surfaces obvious mistakes.
#[must_use]
pub fn validate_settings(bundle: &Bundle) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    for variant in [SettingsVariant::Standard, SettingsVariant::Enhanced] {
        let path = bundle.settings_file(variant);
        let Ok(content) = std::fs::read_to_string(&path) else {
            continue;
        };
        if let Err(e) = serde_json::from_str::<serde_json::Value>(&content) {
            warnings.push(ValidationWarning::new(
                "settings",
                path.display().to_string(),
                format!("not valid JSON: {e}"),
            ));
        }
    }
    warnings
}
