use std::path::Path;

use tracing::info;

use crate::domain::{HostPlatform, ToolEnv};

pub const JAVA_HOME_VAR: &str = "JAVA_HOME";

/// Point `JAVA_HOME` at the Android Studio runtime when nothing else is configured.
pub(super) fn ensure(platform: HostPlatform, env: &ToolEnv, bundled_jbr: &Path) -> ToolEnv {
    if env.contains(JAVA_HOME_VAR) || !platform.is_windows() || !bundled_jbr.is_dir() {
        return env.clone();
    }

    info!("Using the Android Studio runtime at {}", bundled_jbr.display());
    env.with_var(JAVA_HOME_VAR, bundled_jbr.to_string_lossy())
        .with_path_prepended(&bundled_jbr.join("bin"))
}
