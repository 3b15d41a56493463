//! API facade for the application.
//!
//! Wires the system adapters into the export and provisioning commands.

use std::path::PathBuf;

use crate::adapters::{
    ConanCli, DialoguerCredentialPrompt, EnvCredentialProvider, GitCommandAdapter, HttpDownloader,
    SystemProcessRunner,
};
use crate::app::ProvisionContext;
use crate::app::commands::{export, publish};
use crate::domain::{Credentials, ToolEnv, VersionSelection};
use crate::ports::CredentialProvider;

pub use crate::app::commands::export::{
    ExportOptions, ExportReport, ExportedRevision, ExportedVersion,
};
pub use crate::app::commands::publish::{ProvisionOptions, ProvisionReport};
pub use crate::domain::AppError;

/// Export the selected versions of the project at `project_dir` into the Conan cache.
///
/// `version` is a manifest label, `all`, or `None` for the branch tip plus the
/// latest recorded version.
pub fn export_versions(
    project_dir: impl Into<PathBuf>,
    version: Option<&str>,
) -> Result<ExportReport, AppError> {
    let project_dir = std::path::absolute(project_dir.into())?;
    let env = ToolEnv::from_process();

    let manifest = export::load_manifest(&project_dir)?;
    let selection = VersionSelection::resolve(version, &manifest);
    let options = ExportOptions::from_env(project_dir.clone(), &env);

    let git = GitCommandAdapter::new(project_dir);
    let cache = ConanCli::new(SystemProcessRunner::new(), env);
    export::execute(&git, &cache, &manifest, &selection, &options)
}

/// Provision this machine and publish the Android library of the project at `project_dir`.
pub fn publish_android(project_dir: impl Into<PathBuf>) -> Result<ProvisionReport, AppError> {
    let project_dir = std::path::absolute(project_dir.into())?;
    let env = ToolEnv::from_process();
    let options = ProvisionOptions::detect(project_dir, &env)?;

    let ctx = ProvisionContext::new(
        SystemProcessRunner::new(),
        HttpDownloader::new()?,
        CredentialSource::from_env(&env),
    );
    publish::execute(&ctx, &options, env)
}

/// Registry credentials from `GPR_USER`/`GPR_KEY` when both are set, else from the terminal.
#[derive(Debug)]
pub enum CredentialSource {
    Environment(EnvCredentialProvider),
    Interactive(DialoguerCredentialPrompt),
}

impl CredentialSource {
    pub fn from_env(env: &ToolEnv) -> Self {
        let provider = EnvCredentialProvider::from_env(env);
        if provider.is_complete() {
            CredentialSource::Environment(provider)
        } else {
            CredentialSource::Interactive(DialoguerCredentialPrompt)
        }
    }
}

impl CredentialProvider for CredentialSource {
    fn provide(&self) -> Result<Credentials, AppError> {
        match self {
            CredentialSource::Environment(provider) => provider.provide(),
            CredentialSource::Interactive(prompt) => prompt.provide(),
        }
    }
}
