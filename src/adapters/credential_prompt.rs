use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input, Password};
use tracing::info;

use crate::domain::{AppError, Credentials, ProvisioningError};
use crate::ports::CredentialProvider;

/// Asks for GitHub credentials on the terminal. Empty answers are re-prompted.
#[derive(Debug, Clone, Default)]
pub struct DialoguerCredentialPrompt;

impl CredentialProvider for DialoguerCredentialPrompt {
    fn provide(&self) -> Result<Credentials, AppError> {
        info!("Please enter your GitHub credentials to configure them now.");
        let user = prompt_user()?;
        let key = prompt_token()?;
        Ok(Credentials::new(user, key))
    }
}

fn prompt_user() -> Result<String, AppError> {
    Input::<String>::new()
        .with_prompt("GitHub Username")
        .validate_with(|value: &String| -> Result<(), &'static str> {
            if value.trim().is_empty() { Err("Username must not be empty") } else { Ok(()) }
        })
        .interact_text()
        .map(|value| value.trim().to_string())
        .map_err(|err| prompt_error("username", err))
}

fn prompt_token() -> Result<String, AppError> {
    loop {
        let token = Password::new()
            .with_prompt("GitHub Personal Access Token (PAT)")
            .interact()
            .map_err(|err| prompt_error("token", err))?;
        let token = token.trim();
        if !token.is_empty() {
            return Ok(token.to_string());
        }
    }
}

fn prompt_error(field: &str, err: DialoguerError) -> AppError {
    let details = match err {
        DialoguerError::IO(err) if err.kind() == ErrorKind::Interrupted => {
            "credential prompt cancelled".to_string()
        }
        err => format!("Failed to read {}: {}", field, err),
    };
    ProvisioningError::Credentials(details).into()
}
