use std::io;

use thiserror::Error;

use crate::domain::export::ExportError;
use crate::domain::provisioning::ProvisioningError;

/// Library-wide error type for relkit operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// An external command could not be spawned or exited unsuccessfully.
    #[error("Command '{command}' failed: {details}")]
    Subprocess { command: String, details: String },

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// A prerequisite tool or SDK component could not be provided.
    #[error(transparent)]
    Provisioning(#[from] ProvisioningError),

    /// A version could not be exported.
    #[error(transparent)]
    Export(#[from] ExportError),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn subprocess<C: ToString, D: Into<String>>(command: C, details: D) -> Self {
        AppError::Subprocess { command: command.to_string(), details: details.into() }
    }
}
