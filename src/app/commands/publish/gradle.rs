use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::{AppError, HostPlatform, ProjectLayout, ToolEnv};
use crate::ports::{Invocation, ProcessRunner};

const PUBLISH_TASK: &str = ":lib:publish";

pub(super) fn bootstrap_dependencies<R: ProcessRunner>(
    runner: &R,
    python: &Path,
    layout: &ProjectLayout,
    env: &ToolEnv,
) -> Result<(), AppError> {
    let bootstrap = Invocation::for_path(python)
        .path_arg(&layout.bootstrap_script())
        .current_dir(layout.root());
    runner.run(&bootstrap, env)
}

/// Drop stale CMake state so the native build reconfigures against the selected CMake.
pub(super) fn clean_native_cache(layout: &ProjectLayout) {
    let cache = layout.native_build_cache();
    if !cache.exists() {
        return;
    }
    match fs::remove_dir_all(&cache) {
        Ok(()) => debug!("Removed {}", cache.display()),
        Err(err) => warn!("Failed to remove {}: {}", cache.display(), err),
    }
}

/// Stop lingering daemons, then publish without one.
pub(super) fn publish<R: ProcessRunner>(
    runner: &R,
    platform: HostPlatform,
    layout: &ProjectLayout,
    env: &ToolEnv,
) -> Result<(), AppError> {
    let stop = wrapper(platform, layout).arg("--stop");
    if let Err(err) = runner.run(&stop, env) {
        warn!("{}", err);
    }

    runner.run(&wrapper(platform, layout).args([PUBLISH_TASK, "--no-daemon", "--info"]), env)
}

fn wrapper(platform: HostPlatform, layout: &ProjectLayout) -> Invocation {
    let android = layout.android_dir();
    let invocation = if platform.is_windows() {
        Invocation::new("cmd").args(["/c", "gradlew.bat"])
    } else {
        Invocation::for_path(&android.join("gradlew"))
    };
    invocation.current_dir(android)
}
