use tracing::info;

use crate::domain::{AppError, HostPlatform, ProvisioningError, ToolEnv};
use crate::ports::{Invocation, ProcessRunner};

const WINGET_GIT_ID: &str = "Git.Git";

/// Make sure a working `git` is available, installing it through winget on Windows.
pub(super) fn ensure<R: ProcessRunner>(
    runner: &R,
    platform: HostPlatform,
    env: &ToolEnv,
) -> Result<(), AppError> {
    let probe = Invocation::new("git").arg("--version");
    if runner.probe(&probe, env) {
        return Ok(());
    }

    if platform.is_windows() && runner.which("winget", env).is_some() {
        info!("git not found, installing it with winget");
        runner.run(
            &Invocation::new("winget").args(["install", "-e", "--id", WINGET_GIT_ID, "--silent"]),
            env,
        )?;
        return runner.run(&probe, env);
    }

    Err(ProvisioningError::ToolMissing { tool: "git", hint: "install Git and add it to PATH" }
        .into())
}
