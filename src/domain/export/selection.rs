use tracing::warn;

use super::VersionManifest;

/// Reserved label meaning "the tip of the target branch".
pub const SENTINEL_VERSION: &str = "777";

/// Argument that selects every recorded version.
pub const ALL_VERSIONS: &str = "all";

/// Ordered list of version labels to export in one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSelection {
    labels: Vec<String>,
}

impl VersionSelection {
    /// Build the selection from the optional command-line argument.
    ///
    /// - none: the sentinel plus the latest recorded version
    /// - `all`: the sentinel plus every recorded version, in file order
    /// - anything else: exactly that label
    pub fn resolve(argument: Option<&str>, manifest: &VersionManifest) -> Self {
        let labels = match argument {
            None => std::iter::once(SENTINEL_VERSION)
                .chain(manifest.latest())
                .map(str::to_string)
                .collect(),
            Some(ALL_VERSIONS) => {
                if manifest.contains(SENTINEL_VERSION) {
                    warn!(
                        "conandata.yml records a version named '{}', which collides with the branch-tip label; it will be exported twice",
                        SENTINEL_VERSION
                    );
                }
                std::iter::once(SENTINEL_VERSION)
                    .chain(manifest.labels())
                    .map(str::to_string)
                    .collect()
            }
            Some(label) => vec![label.to_string()],
        };

        Self { labels }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}
