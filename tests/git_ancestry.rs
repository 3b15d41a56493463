mod harness;

use harness::TestContext;
use harness::git_repository::git;
use relkit::adapters::GitCommandAdapter;
use relkit::ports::Git;

#[test]
fn successor_is_next_commit_on_the_ancestry_path() {
    let mut ctx = TestContext::new();
    let base = ctx.commit("base");
    let next = ctx.commit("next");
    ctx.commit("tip");
    let adapter = GitCommandAdapter::new(ctx.work_dir().to_path_buf());

    assert_eq!(adapter.first_ancestry_successor(&base, "master").unwrap(), Some(next));
}

#[test]
fn resolution_is_deterministic() {
    let mut ctx = TestContext::new();
    let base = ctx.commit("base");
    ctx.commit("one");
    ctx.commit("two");
    let adapter = GitCommandAdapter::new(ctx.work_dir().to_path_buf());

    let first = adapter.first_ancestry_successor(&base, "master").unwrap();
    let second = adapter.first_ancestry_successor(&base, "master").unwrap();
    assert_eq!(first, second);
}

#[test]
fn base_at_tip_has_no_successor() {
    let mut ctx = TestContext::new();
    ctx.commit("first");
    let tip = ctx.commit("tip");
    let adapter = GitCommandAdapter::new(ctx.work_dir().to_path_buf());

    assert_eq!(adapter.first_ancestry_successor(&tip, "master").unwrap(), None);
}

#[test]
fn side_branch_commits_are_not_on_the_path() {
    let mut ctx = TestContext::new();
    let root = ctx.commit_file("history.txt", "root", Some("2024-01-01T00:00:00Z"));
    let base = ctx.commit_file("history.txt", "base", Some("2024-01-02T00:00:00Z"));

    // Does not descend from `base` but is merged into the tip.
    git(ctx.work_dir(), &["checkout", "-b", "side", &root]);
    ctx.commit_file("side.txt", "side work", Some("2024-01-03T00:00:00Z"));
    git(ctx.work_dir(), &["checkout", "master"]);
    let on_path = ctx.commit_file("history.txt", "after base", Some("2024-01-04T00:00:00Z"));
    ctx.merge("side", Some("2024-01-05T00:00:00Z"));

    let adapter = GitCommandAdapter::new(ctx.work_dir().to_path_buf());
    assert_eq!(adapter.first_ancestry_successor(&base, "master").unwrap(), Some(on_path));
}

#[test]
fn merged_branch_successor_follows_git_log_order() {
    let mut ctx = TestContext::new();
    ctx.commit_file("history.txt", "root", Some("2024-01-01T00:00:00Z"));
    let base = ctx.commit_file("history.txt", "base", Some("2024-01-01T12:00:00Z"));

    // Both branches descend from `base`; the older commit sits behind the merge's second parent.
    git(ctx.work_dir(), &["checkout", "-b", "side", &base]);
    let side = ctx.commit_file("side.txt", "side work", Some("2024-01-02T00:00:00Z"));
    git(ctx.work_dir(), &["checkout", "master"]);
    ctx.commit_file("history.txt", "main work", Some("2024-01-03T00:00:00Z"));
    ctx.merge("side", Some("2024-01-04T00:00:00Z"));

    let range = format!("{base}..master");
    let log = git(
        ctx.work_dir(),
        &["log", "--reverse", "--ancestry-path", "--format=%H", &range],
    );
    let expected = log.lines().next().map(str::to_string);

    let adapter = GitCommandAdapter::new(ctx.work_dir().to_path_buf());
    let successor = adapter.first_ancestry_successor(&base, "master").unwrap();
    assert_eq!(successor, expected);
    assert_eq!(successor, Some(side));
}

#[test]
fn unknown_base_is_a_git_error() {
    let mut ctx = TestContext::new();
    ctx.commit("only");
    let adapter = GitCommandAdapter::new(ctx.work_dir().to_path_buf());

    let err = adapter.first_ancestry_successor("0123456789abcdef", "master").unwrap_err();
    assert!(matches!(err, relkit::AppError::GitError { .. }));
}

#[test]
fn checkouts_move_head() {
    let mut ctx = TestContext::new();
    let first = ctx.commit("first");
    let second = ctx.commit("second");
    ctx.push();
    let adapter = GitCommandAdapter::new(ctx.work_dir().to_path_buf());

    adapter.checkout_detached(&first).unwrap();
    assert_eq!(ctx.head(), first);

    git(ctx.work_dir(), &["fetch", "origin"]);
    adapter.checkout_remote_branch("origin", "master").unwrap();
    assert_eq!(ctx.head(), second);
    assert_eq!(git(ctx.work_dir(), &["rev-parse", "--abbrev-ref", "HEAD"]), "master");
}
