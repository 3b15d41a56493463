use crate::domain::{AppError, Credentials};

/// Source of registry credentials when none are configured yet.
pub trait CredentialProvider {
    fn provide(&self) -> Result<Credentials, AppError>;
}
