use crate::domain::AppError;
use crate::ports::Git;
use git2::{Oid, Repository};
use std::path::PathBuf;
use std::process::Command;
use tracing::info;

/// Git access for a working copy: revisions are resolved through libgit2,
/// history listing and checkouts go through the `git` CLI.
#[derive(Debug, Clone)]
pub struct GitCommandAdapter {
    root: PathBuf,
}

impl GitCommandAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn repo(&self) -> Result<Repository, AppError> {
        Repository::discover(&self.root)
            .map_err(|e| git2_error("git2::Repository::discover", e))
    }

    fn resolve_commit(&self, repo: &Repository, spec: &str) -> Result<Oid, AppError> {
        repo.revparse_single(spec)
            .and_then(|object| object.peel_to_commit())
            .map(|commit| commit.id())
            .map_err(|e| git2_error(&format!("git2::Repository::revparse_single({spec})"), e))
    }

    fn run(&self, args: &[&str]) -> Result<String, AppError> {
        let rendered = format!("git {}", args.join(" "));
        info!("> {}", rendered);

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()
            .map_err(|e| AppError::GitError { command: rendered.clone(), details: e.to_string() })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::GitError {
                command: rendered,
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Git for GitCommandAdapter {
    fn checkout_remote_branch(&self, remote: &str, branch: &str) -> Result<(), AppError> {
        let upstream = format!("{remote}/{branch}");
        self.run(&["checkout", "-B", branch, &upstream])?;
        Ok(())
    }

    fn first_ancestry_successor(&self, base: &str, tip: &str) -> Result<Option<String>, AppError> {
        let repo = self.repo()?;
        let base_oid = self.resolve_commit(&repo, base)?.to_string();
        let tip_oid = self.resolve_commit(&repo, tip)?.to_string();

        // Same ordering as `git log`: commit date, reversed.
        let range = format!("{base_oid}..{tip_oid}");
        let log = self.run(&["log", "--reverse", "--ancestry-path", "--format=%H", &range])?;
        Ok(log.lines().map(str::trim).find(|line| !line.is_empty()).map(str::to_string))
    }

    fn checkout_detached(&self, revision: &str) -> Result<(), AppError> {
        self.run(&["checkout", "--detach", revision])?;
        Ok(())
    }
}

fn git2_error(command: &str, err: git2::Error) -> AppError {
    AppError::GitError { command: command.to_string(), details: err.message().to_string() }
}
