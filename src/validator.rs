use std::path::Path;

use anyhow::Result;

use crate::catalog::Catalog;
use crate::env::EnvSnapshot;
use crate::loader::DEFAULT_ENV_FILE;

/// Remediation text naming the dotfile missing variables should go into.
pub fn missing_hint(env_file: &Path) -> String {
    if env_file == Path::new(DEFAULT_ENV_FILE) {
        format!("Add these to {} in your repository root", DEFAULT_ENV_FILE)
    } else {
        format!("Add these to {}", env_file.display())
    }
}

/// Result of checking a catalog against an environment snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupReport {
    pub missing_required: Vec<String>,
    pub missing_optional: Vec<String>,
}

impl SetupReport {
    pub fn is_ok(&self) -> bool {
        self.missing_required.is_empty()
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_ok() {
            0
        } else {
            1
        }
    }
}

fn missing<'a>(names: impl Iterator<Item = &'a str>, env: &EnvSnapshot) -> Vec<String> {
    names
        .filter(|name| !env.is_present(name))
        .map(str::to_owned)
        .collect()
}

pub fn validate(catalog: &Catalog, env: &EnvSnapshot) -> SetupReport {
    SetupReport {
        missing_required: missing(catalog.required(), env),
        missing_optional: missing(catalog.optional(), env),
    }
}

/// Fail if any of `names` is missing from `env`.
///
/// For scripts that need a few variables and have no use for the full report.
pub fn require(names: &[&str], env: &EnvSnapshot, env_file: &Path) -> Result<()> {
    let missing = missing(names.iter().copied(), env);
    if !missing.is_empty() {
        anyhow::bail!(
            "Missing required environment variables: {}. {}",
            missing.join(", "),
            missing_hint(env_file)
        );
    }
    Ok(())
}
