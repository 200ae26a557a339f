//! Settings for the Full-profile integration steps (`installer.toml`).
use serde::Deserialize;
use std::path::PathBuf;

/// Default upstream document fetched into the project.
const DEFAULT_REFERENCE_URL: &str =
    "https://raw.githubusercontent.com/veteranbv/claude-UserPromptSubmit-hook/main/README.md";

/// External-step settings, with built-in defaults for every field.
///
/// # Examples
///
/// ```
/// use prompt_hooks_installer::config::installer::InstallerConfig;
///
/// let config: InstallerConfig = toml::from_str("").unwrap();
/// assert_eq!(config.registrar.program, "claude");
/// assert_eq!(config.integrations.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstallerConfig {
    /// Third-party framework installed through a package manager.
    pub framework: FrameworkConfig,
    /// Reference document downloaded over HTTP.
    pub reference: ReferenceConfig,
    /// CLI used to list and register integrations.
    pub registrar: RegistrarConfig,
    /// Integrations registered through the registrar.
    pub integrations: Vec<IntegrationSpec>,
}

/// Package-manager invocation that materializes the framework directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrameworkConfig {
    /// Package-manager program (e.g. `npx`).
    pub program: String,
    /// Arguments passed to the program.
    pub args: Vec<String>,
    /// Project-relative directory whose presence means "already installed".
    pub directory: PathBuf,
}

/// Remote document and where it lands.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReferenceConfig {
    /// URL to fetch.
    pub url: String,
    /// Project-relative destination path.
    pub destination: PathBuf,
}

/// The integration registration CLI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistrarConfig {
    /// Program name looked up on `PATH`.
    pub program: String,
}

/// A named integration and how the registrar should reach it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IntegrationSpec {
    /// Name the integration is registered under.
    pub name: String,
    /// Transport used by the integration.
    #[serde(flatten)]
    pub transport: Transport,
}

/// Integration transport.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "transport", rename_all = "lowercase")]
pub enum Transport {
    /// Launched as a subprocess through a package runner.
    Stdio {
        /// Program and arguments the registrar will launch.
        command: Vec<String>,
    },
    /// Reached directly over HTTP.
    Http {
        /// Endpoint URL.
        url: String,
    },
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            framework: FrameworkConfig::default(),
            reference: ReferenceConfig::default(),
            registrar: RegistrarConfig::default(),
            integrations: vec![
                IntegrationSpec {
                    name: "context7".to_string(),
                    transport: Transport::Stdio {
                        command: vec![
                            "npx".to_string(),
                            "-y".to_string(),
                            "@upstash/context7-mcp".to_string(),
                        ],
                    },
                },
                IntegrationSpec {
                    name: "deepwiki".to_string(),
                    transport: Transport::Http {
                        url: "https://mcp.deepwiki.com/mcp".to_string(),
                    },
                },
            ],
        }
    }
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        Self {
            program: "npx".to_string(),
            args: vec!["bmad-method".to_string(), "install".to_string()],
            directory: PathBuf::from("bmad-core"),
        }
    }
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_REFERENCE_URL.to_string(),
            destination: PathBuf::from(".claude/docs/prompt-hook-reference.md"),
        }
    }
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        Self {
            program: "claude".to_string(),
        }
    }
}
