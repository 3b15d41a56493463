/// Export capability error.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Version '{0}' is not listed in conandata.yml")]
    UnknownVersion(String),

    #[error("No commit on the ancestry path from {base} to {tip}")]
    NoSuccessor { base: String, tip: String },

    #[error("Malformed version manifest: {0}")]
    Manifest(String),
}
