use indexmap::IndexMap;
use serde_yaml::Value;

use super::ExportError;

const COMMIT_HASH_KEY: &str = "commit_hash";

/// Known-good revision recorded for a released version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
    pub hash: String,
}

/// Released versions from `conandata.yml`, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionManifest {
    entries: IndexMap<String, VersionRecord>,
}

impl VersionManifest {
    pub const FILE_NAME: &'static str = "conandata.yml";

    /// Parse the `commit_hash` section of a Conan data file.
    ///
    /// Version keys may be plain YAML numbers (`1.0: ...`); they are kept in
    /// their textual form. Duplicate keys are rejected by the YAML loader.
    pub fn parse(content: &str) -> Result<Self, ExportError> {
        let document: Value =
            serde_yaml::from_str(content).map_err(|e| ExportError::Manifest(e.to_string()))?;

        let section = document.get(COMMIT_HASH_KEY).ok_or_else(|| {
            ExportError::Manifest(format!("missing `{COMMIT_HASH_KEY}` section"))
        })?;

        let mapping = match section {
            Value::Null => return Ok(Self::default()),
            Value::Mapping(mapping) => mapping,
            _ => {
                return Err(ExportError::Manifest(format!(
                    "`{COMMIT_HASH_KEY}` must map versions to records"
                )));
            }
        };

        let mut entries = IndexMap::with_capacity(mapping.len());
        for (key, record) in mapping {
            let label = version_label(key)?;
            let hash = record.get("hash").and_then(scalar_text).ok_or_else(|| {
                ExportError::Manifest(format!("version '{label}' has no `hash`"))
            })?;
            entries.insert(label, VersionRecord { hash });
        }

        Ok(Self { entries })
    }

    pub fn from_entries<I, L, H>(entries: I) -> Self
    where
        I: IntoIterator<Item = (L, H)>,
        L: Into<String>,
        H: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(label, hash)| (label.into(), VersionRecord { hash: hash.into() }));
        Self { entries: entries.collect() }
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Most recently recorded version (the last entry of the file).
    pub fn latest(&self) -> Option<&str> {
        self.entries.last().map(|(label, _)| label.as_str())
    }

    pub fn hash(&self, label: &str) -> Option<&str> {
        self.entries.get(label).map(|record| record.hash.as_str())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// YAML has already turned an unquoted `1.10` into the float 1.1, so only
// integer keys can be turned back into the label the file spells out.
fn version_label(key: &Value) -> Result<String, ExportError> {
    match key {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) if number.is_i64() || number.is_u64() => Ok(number.to_string()),
        Value::Number(number) => Err(ExportError::Manifest(format!(
            "version key {number} is not a string; quote it (e.g. \"{number}\") to keep its exact spelling"
        ))),
        _ => Err(ExportError::Manifest(format!("version key {key:?} is not a scalar"))),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
