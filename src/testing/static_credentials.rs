use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::{AppError, Credentials};
use crate::ports::CredentialProvider;

/// Hands out fixed credentials and counts how often it was asked.
pub struct StaticCredentials {
    credentials: Credentials,
    requests: AtomicUsize,
}

impl StaticCredentials {
    pub fn new(user: &str, key: &str) -> Self {
        Self { credentials: Credentials::new(user, key), requests: AtomicUsize::new(0) }
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl CredentialProvider for StaticCredentials {
    fn provide(&self) -> Result<Credentials, AppError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        Ok(self.credentials.clone())
    }
}
