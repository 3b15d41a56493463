use std::fmt;

pub const GPR_USER_PROPERTY: &str = "gpr.user";
pub const GPR_KEY_PROPERTY: &str = "gpr.key";

/// GitHub Package Registry login used by the Gradle publish task.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    user: String,
    key: String,
}

impl Credentials {
    pub fn new(user: impl Into<String>, key: impl Into<String>) -> Self {
        Self { user: user.into(), key: key.into() }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials").field("user", &self.user).field("key", &"[REDACTED]").finish()
    }
}
