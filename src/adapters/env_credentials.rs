use crate::domain::{AppError, Credentials, ProvisioningError, ToolEnv};
use crate::ports::CredentialProvider;

pub const GPR_USER_VAR: &str = "GPR_USER";
pub const GPR_KEY_VAR: &str = "GPR_KEY";

/// Non-interactive credentials taken from `GPR_USER` / `GPR_KEY`, for CI.
#[derive(Clone, Default)]
pub struct EnvCredentialProvider {
    user: Option<String>,
    key: Option<String>,
}

impl EnvCredentialProvider {
    pub fn from_env(env: &ToolEnv) -> Self {
        Self {
            user: env.non_empty(GPR_USER_VAR).map(str::to_string),
            key: env.non_empty(GPR_KEY_VAR).map(str::to_string),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.user.is_some() && self.key.is_some()
    }
}

impl std::fmt::Debug for EnvCredentialProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvCredentialProvider")
            .field("user", &self.user)
            .field("key", &self.key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl CredentialProvider for EnvCredentialProvider {
    fn provide(&self) -> Result<Credentials, AppError> {
        match (&self.user, &self.key) {
            (Some(user), Some(key)) => Ok(Credentials::new(user.clone(), key.clone())),
            _ => Err(ProvisioningError::Credentials(format!(
                "{GPR_USER_VAR} and {GPR_KEY_VAR} must both be set"
            ))
            .into()),
        }
    }
}
