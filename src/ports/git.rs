use crate::domain::AppError;

pub trait Git {
    /// Force-create or reset the local `branch` to `<remote>/<branch>` and check it out.
    fn checkout_remote_branch(&self, remote: &str, branch: &str) -> Result<(), AppError>;

    /// Earliest commit that descends from `base` and is an ancestor of (or is) `tip`.
    ///
    /// Returns `None` when `base` already is the tip or is not on its history.
    fn first_ancestry_successor(&self, base: &str, tip: &str) -> Result<Option<String>, AppError>;

    /// Check out `revision` with a detached HEAD.
    fn checkout_detached(&self, revision: &str) -> Result<(), AppError>;
}
