use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::Git;

#[derive(Default)]
pub struct FakeGit {
    pub operations: Mutex<Vec<String>>,
    successors: Mutex<HashMap<String, String>>,
    failing_checkout: Mutex<Option<String>>,
}

impl FakeGit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_successor(&self, base: &str, commit: &str) {
        self.successors.lock().unwrap().insert(base.to_string(), commit.to_string());
    }

    pub fn fail_checkout(&self, revision: &str) {
        *self.failing_checkout.lock().unwrap() = Some(revision.to_string());
    }

    pub fn operations(&self) -> Vec<String> {
        self.operations.lock().unwrap().clone()
    }
}

impl Git for FakeGit {
    fn checkout_remote_branch(&self, remote: &str, branch: &str) -> Result<(), AppError> {
        self.operations.lock().unwrap().push(format!("checkout -B {branch} {remote}/{branch}"));
        Ok(())
    }

    fn first_ancestry_successor(&self, base: &str, tip: &str) -> Result<Option<String>, AppError> {
        self.operations.lock().unwrap().push(format!("ancestry-path {base}..{tip}"));
        Ok(self.successors.lock().unwrap().get(base).cloned())
    }

    fn checkout_detached(&self, revision: &str) -> Result<(), AppError> {
        if self.failing_checkout.lock().unwrap().as_deref() == Some(revision) {
            return Err(AppError::GitError {
                command: format!("git checkout --detach {revision}"),
                details: "pathspec did not match".to_string(),
            });
        }
        self.operations.lock().unwrap().push(format!("checkout {revision}"));
        Ok(())
    }
}
