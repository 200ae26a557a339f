//! Integration registration resource.
use std::collections::HashSet;
use std::sync::Arc;

use anyhow::Result;

use super::{Applicable, Resource, ResourceChange, ResourceState};
use crate::config::installer::{IntegrationSpec, Transport};
use crate::exec::Executor;

/// An integration registered with the registrar CLI (e.g. `claude mcp add`).
#[derive(Debug)]
pub struct IntegrationResource {
    /// Integration to register.
    pub spec: IntegrationSpec,
    /// Registrar program.
    pub registrar: String,
    executor: Arc<dyn Executor>,
}

impl IntegrationResource {
    /// Create a new integration resource.
    #[must_use]
    pub fn new(spec: IntegrationSpec, registrar: String, executor: Arc<dyn Executor>) -> Self {
        Self {
            spec,
            registrar,
            executor,
        }
    }

    /// Arguments passed to the registrar to add this integration.
    #[must_use]
    pub fn add_args(&self) -> Vec<String> {
        let mut args = vec!["mcp".to_string(), "add".to_string()];
        match &self.spec.transport {
            Transport::Stdio { command } => {
                args.push(self.spec.name.clone());
                args.push("--".to_string());
                args.extend(command.iter().cloned());
            }
            Transport::Http { url } => {
                args.extend([
                    "--transport".to_string(),
                    "http".to_string(),
                    self.spec.name.clone(),
                    url.clone(),
                ]);
            }
        }
        args
    }

    /// The registration command a user can run by hand.
    #[must_use]
    pub fn manual_instructions(&self) -> String {
        std::iter::once(self.registrar.clone())
            .chain(self.add_args())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Determine the resource state from a pre-fetched set of registered names.
    #[must_use]
    pub fn state_from_registered(&self, registered: &HashSet<String>) -> ResourceState {
        if registered.contains(&self.spec.name) {
            ResourceState::Correct
        } else {
            ResourceState::Missing
        }
    }
}

/// Query the names of all integrations known to `registrar`.
///
/// Parses `<registrar> mcp list`, whose entries look like
/// `context7: npx -y @upstash/context7-mcp - ✓ Connected`.  A failing list
/// command yields an empty set.
///
/// # Errors
///
/// Returns an error if the registrar cannot be executed.
pub fn get_registered_integrations(
    registrar: &str,
    executor: &dyn Executor,
) -> Result<HashSet<String>> {
    let result = executor.run_unchecked(registrar, &["mcp", "list"])?;
    let mut set = HashSet::new();
    if result.success {
        for line in result.stdout.lines() {
            if let Some((name, _)) = line.split_once(':') {
                let name = name.trim();
                if !name.is_empty() && !name.contains(char::is_whitespace) {
                    set.insert(name.to_string());
                }
            }
        }
    }
    Ok(set)
}

impl Applicable for IntegrationResource {
    fn description(&self) -> String {
        self.spec.name.clone()
    }

    fn apply(&self) -> Result<ResourceChange> {
        let args = self.add_args();
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.executor.run(&self.registrar, &args)?;
        Ok(ResourceChange::Applied)
    }
}

impl Resource for IntegrationResource {
    fn current_state(&self) -> Result<ResourceState> {
        let registered = get_registered_integrations(&self.registrar, &*self.executor)?;
        Ok(self.state_from_registered(&registered))
    }
}
