//! Export versions of the native library recipe into the local Conan cache.
//!
//! Every selected label is materialized as a git checkout first: the branch-tip
//! label resets the local branch to its remote, and a recorded version checks
//! out the commit that follows its recorded hash on the way to the branch tip.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::{
    AppError, ExportError, PACKAGE_NAMESPACE, PackageReference, SENTINEL_VERSION, ToolEnv,
    VersionManifest, VersionSelection,
};
use crate::ports::{Git, PackageCache};

pub const DEFAULT_BRANCH: &str = "master";
pub const BRANCH_OVERRIDE_VAR: &str = "bamboo_repository_branch_name";
pub const REMOTE: &str = "origin";

#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Directory holding `conandata.yml` and the recipe.
    pub project_dir: PathBuf,
    /// Branch whose tip bounds the ancestry search.
    pub branch: String,
}

impl ExportOptions {
    pub fn new(project_dir: impl Into<PathBuf>, branch: impl Into<String>) -> Self {
        Self { project_dir: project_dir.into(), branch: branch.into() }
    }

    /// Options with the branch taken from the CI override variable, if set.
    pub fn from_env(project_dir: impl Into<PathBuf>, env: &ToolEnv) -> Self {
        let branch = env.non_empty(BRANCH_OVERRIDE_VAR).unwrap_or(DEFAULT_BRANCH);
        Self::new(project_dir, branch)
    }
}

/// Source state a version was exported from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportedRevision {
    BranchTip(String),
    Commit(String),
}

impl fmt::Display for ExportedRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportedRevision::BranchTip(branch) => write!(f, "{REMOTE}/{branch}"),
            ExportedRevision::Commit(commit) => f.write_str(commit),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedVersion {
    pub label: String,
    pub revision: ExportedRevision,
}

#[derive(Debug, Clone, Default)]
pub struct ExportReport {
    pub exported: Vec<ExportedVersion>,
}

/// Load `conandata.yml` from the project directory.
pub fn load_manifest(project_dir: &Path) -> Result<VersionManifest, AppError> {
    let path = project_dir.join(VersionManifest::FILE_NAME);
    let content = fs::read_to_string(&path).map_err(|e| {
        AppError::config_error(format!("Failed to read {}: {}", path.display(), e))
    })?;
    Ok(VersionManifest::parse(&content)?)
}

/// Export every selected label in order. The first failure stops the run.
pub fn execute<G, C>(
    git: &G,
    cache: &C,
    manifest: &VersionManifest,
    selection: &VersionSelection,
    options: &ExportOptions,
) -> Result<ExportReport, AppError>
where
    G: Git,
    C: PackageCache,
{
    let mut report = ExportReport::default();

    for label in selection.labels() {
        let revision = checkout(git, manifest, label, &options.branch)?;
        let reference = PackageReference::new(label.as_str(), PACKAGE_NAMESPACE);
        cache.export(&options.project_dir, &reference)?;
        info!("Exported {} from {}", label, revision);
        report.exported.push(ExportedVersion { label: label.clone(), revision });
    }

    Ok(report)
}

fn checkout<G: Git>(
    git: &G,
    manifest: &VersionManifest,
    label: &str,
    branch: &str,
) -> Result<ExportedRevision, AppError> {
    if label == SENTINEL_VERSION {
        git.checkout_remote_branch(REMOTE, branch)?;
        return Ok(ExportedRevision::BranchTip(branch.to_string()));
    }

    let base = manifest.hash(label).ok_or_else(|| ExportError::UnknownVersion(label.to_string()))?;
    let commit = git.first_ancestry_successor(base, branch)?.ok_or_else(|| {
        ExportError::NoSuccessor { base: base.to_string(), tip: branch.to_string() }
    })?;
    info!("Version {} ({}) resolves to {}", label, base, commit);

    git.checkout_detached(&commit)?;
    Ok(ExportedRevision::Commit(commit))
}
