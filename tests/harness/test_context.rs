//! Shared testing harness for `relkit` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::git_repository::{
    add_origin_remote, configure_user, git, git_with_dates, head, init_bare_repo,
};

/// A library checkout on `master` with a bare `origin` next to it.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    origin_dir: PathBuf,
    commits: usize,
}

impl TestContext {
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        let origin_dir = root.path().join("origin.git");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(&origin_dir).expect("Failed to create origin directory");

        git(&work_dir, &["init", "--initial-branch=master"]);
        configure_user(&work_dir);
        init_bare_repo(&origin_dir);
        add_origin_remote(&work_dir, &origin_dir.to_string_lossy());

        Self { root, work_dir, origin_dir, commits: 0 }
    }

    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Commit a change to `history.txt` and return the new commit id.
    pub(crate) fn commit(&mut self, message: &str) -> String {
        self.commit_file("history.txt", message, None)
    }

    /// Append a line to `file`, commit it and return the new commit id.
    ///
    /// `date` (e.g. `2024-01-02T00:00:00Z`) pins both author and committer dates.
    pub(crate) fn commit_file(&mut self, file: &str, message: &str, date: Option<&str>) -> String {
        self.commits += 1;
        let path = self.work_dir.join(file);
        let mut content = fs::read_to_string(&path).unwrap_or_default();
        content.push_str(&format!("{} {}\n", self.commits, message));
        fs::write(&path, content).expect("Failed to write commit file");

        git(&self.work_dir, &["add", file]);
        git_with_dates(&self.work_dir, &["commit", "-m", message], date);
        head(&self.work_dir)
    }

    /// Merge `branch` into the current branch with a merge commit.
    pub(crate) fn merge(&mut self, branch: &str, date: Option<&str>) -> String {
        let message = format!("merge {branch}");
        git_with_dates(&self.work_dir, &["merge", "--no-ff", "-m", &message, branch], date);
        head(&self.work_dir)
    }

    pub(crate) fn push(&self) {
        git(&self.work_dir, &["push", "origin", "master"]);
    }

    pub(crate) fn head(&self) -> String {
        head(&self.work_dir)
    }

    /// Write an untracked `conandata.yml` mapping labels to commit ids.
    pub(crate) fn write_manifest(&self, versions: &[(&str, &str)]) {
        let mut content = String::from("commit_hash:\n");
        for (label, hash) in versions {
            content.push_str(&format!("  \"{}\":\n    hash: \"{}\"\n", label, hash));
        }
        fs::write(self.work_dir.join("conandata.yml"), content)
            .expect("Failed to write conandata.yml");
    }

    pub(crate) fn cli(&self, bin: &str) -> Command {
        let mut cmd = Command::cargo_bin(bin).expect("Failed to locate binary");
        cmd.current_dir(&self.work_dir).env("HOME", self.root.path()).env("RUST_LOG", "info");
        cmd
    }
}
