use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, properties};

/// A `key=value` properties file on disk.
#[derive(Debug, Clone)]
pub struct PropertiesFile {
    path: PathBuf,
}

impl PropertiesFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entries of the file; a missing file reads as empty.
    pub fn read(&self) -> Result<BTreeMap<String, String>, AppError> {
        Ok(self.content()?.map(|content| properties::parse(&content)).unwrap_or_default())
    }

    pub fn upsert(&self, key: &str, value: &str) -> Result<(), AppError> {
        let updated = properties::upsert(self.content()?.as_deref(), key, value);
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, updated)?;
        Ok(())
    }

    fn content(&self) -> Result<Option<String>, AppError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
