use std::path::Path;

use tracing::info;

use crate::adapters::PropertiesFile;
use crate::domain::AppError;
use crate::domain::provisioning::{GPR_KEY_PROPERTY, GPR_USER_PROPERTY};
use crate::ports::CredentialProvider;

/// Store registry credentials in the user Gradle properties unless both are present.
///
/// Returns whether anything was written.
pub(super) fn ensure<C: CredentialProvider>(provider: &C, path: &Path) -> Result<bool, AppError> {
    let properties = PropertiesFile::new(path);
    let existing = properties.read()?;
    if existing.contains_key(GPR_USER_PROPERTY) && existing.contains_key(GPR_KEY_PROPERTY) {
        return Ok(false);
    }

    info!("Missing GitHub Package Registry (GPR) credentials in {}", path.display());
    let credentials = provider.provide()?;
    properties.upsert(GPR_USER_PROPERTY, credentials.user())?;
    properties.upsert(GPR_KEY_PROPERTY, credentials.key())?;
    info!("Saved GitHub Package Registry credentials to {}", path.display());
    Ok(true)
}
