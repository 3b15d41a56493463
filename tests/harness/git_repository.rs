use std::path::Path;

pub(crate) fn git(repo_dir: &Path, args: &[&str]) -> String {
    git_with_dates(repo_dir, args, None)
}

/// Run git with author and committer dates pinned to `date` when given.
pub(crate) fn git_with_dates(repo_dir: &Path, args: &[&str], date: Option<&str>) -> String {
    let mut command = std::process::Command::new("git");
    command.args(args).current_dir(repo_dir);
    if let Some(date) = date {
        command.env("GIT_AUTHOR_DATE", date).env("GIT_COMMITTER_DATE", date);
    }
    let output = command
        .output()
        .unwrap_or_else(|e| panic!("git {} failed to start: {}", args.join(" "), e));
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

pub(crate) fn configure_user(repo_dir: &Path) {
    git(repo_dir, &["config", "user.email", "test@example.com"]);
    git(repo_dir, &["config", "user.name", "Test User"]);
}

pub(crate) fn init_bare_repo(path: &Path) {
    git(path, &["init", "--bare", "--initial-branch=master"]);
}

pub(crate) fn add_origin_remote(repo_dir: &Path, url: &str) {
    git(repo_dir, &["remote", "add", "origin", url]);
}

pub(crate) fn head(repo_dir: &Path) -> String {
    git(repo_dir, &["rev-parse", "HEAD"])
}
