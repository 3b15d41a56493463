//! Rust toolchain provisioning: rustup, cargo, cargo-ndk, the pinned channel
//! and the Android cross-compilation targets.

use tracing::info;

use super::{ProvisionOptions, read_optional};
use crate::app::ProvisionContext;
use crate::domain::provisioning::{targets, toolchain_pin};
use crate::domain::{AppError, ProjectLayout, ProvisioningError, ToolEnv};
use crate::ports::{CredentialProvider, InstallerDownloader, Invocation, ProcessRunner};

pub const RUSTUP_INIT_URL: &str = "https://win.rustup.rs/x86_64";
pub const RUSTUP_TOOLCHAIN_VAR: &str = "RUSTUP_TOOLCHAIN";

const RUSTUP_INSTALLER: &str = "rustup-init.exe";

pub(super) fn ensure_cargo_ndk<R, D, C>(
    ctx: &ProvisionContext<R, D, C>,
    options: &ProvisionOptions,
    env: ToolEnv,
) -> Result<ToolEnv, AppError>
where
    R: ProcessRunner,
    D: InstallerDownloader,
    C: CredentialProvider,
{
    let runner = ctx.runner();
    let cargo_bin = options.cargo_bin_dir();
    let env = if cargo_bin.is_dir() { env.with_path_prepended(&cargo_bin) } else { env };

    let env = ensure_installed(ctx, options, env, "rustup")?;
    runner.run(&Invocation::new("rustup").arg("--version"), &env)?;
    let env = ensure_installed(ctx, options, env, "cargo")?;
    runner.run(&Invocation::new("cargo").arg("--version"), &env)?;

    let ndk = Invocation::new("cargo").args(["ndk", "--version"]);
    if !runner.probe(&ndk, &env) {
        info!("Installing cargo-ndk");
        runner.run(&Invocation::new("cargo").args(["install", "cargo-ndk"]), &env)?;
        runner.run(&ndk, &env)?;
    }
    Ok(env)
}

fn ensure_installed<R, D, C>(
    ctx: &ProvisionContext<R, D, C>,
    options: &ProvisionOptions,
    env: ToolEnv,
    tool: &'static str,
) -> Result<ToolEnv, AppError>
where
    R: ProcessRunner,
    D: InstallerDownloader,
    C: CredentialProvider,
{
    if ctx.runner().which(tool, &env).is_some() {
        return Ok(env);
    }
    if !options.platform.is_windows() {
        return Err(ProvisioningError::ToolMissing {
            tool,
            hint: "install rustup from https://rustup.rs and retry",
        }
        .into());
    }

    info!("{} not found, installing rustup", tool);
    let installer = options.temp_dir.join(RUSTUP_INSTALLER);
    ctx.downloader().download(RUSTUP_INIT_URL, &installer)?;
    ctx.runner().run(&Invocation::for_path(&installer).arg("-y"), &env)?;
    Ok(env.with_path_prepended(&options.cargo_bin_dir()))
}

/// Channel pinned by `rust-toolchain.toml`, falling back to a legacy `rust-toolchain` file.
pub(super) fn read_pin(layout: &ProjectLayout) -> Result<Option<String>, AppError> {
    let pinned = read_optional(&layout.toolchain_file())?;
    if let Some(channel) = pinned.as_deref().and_then(toolchain_pin::from_toml) {
        return Ok(Some(channel));
    }
    Ok(read_optional(&layout.legacy_toolchain_file())?
        .and_then(|content| toolchain_pin::from_legacy(&content)))
}

pub(super) fn apply_pin<R: ProcessRunner>(
    runner: &R,
    pin: Option<&str>,
    env: ToolEnv,
) -> Result<ToolEnv, AppError> {
    let Some(channel) = pin else {
        return Ok(env);
    };

    info!("Ensuring Rust toolchain {} is installed", channel);
    runner.run(&Invocation::new("rustup").args(["toolchain", "install", channel]), &env)?;
    Ok(env.with_var(RUSTUP_TOOLCHAIN_VAR, channel))
}

/// Add the Android targets the toolchain is missing; returns what was added.
pub(super) fn ensure_targets<R: ProcessRunner>(
    runner: &R,
    pin: Option<&str>,
    env: &ToolEnv,
) -> Result<Vec<&'static str>, AppError> {
    let with_toolchain = |invocation: Invocation| match pin {
        Some(channel) => invocation.args(["--toolchain", channel]),
        None => invocation,
    };

    let list = with_toolchain(Invocation::new("rustup").args(["target", "list", "--installed"]));
    let installed = runner.capture(&list, env)?;
    let missing = targets::missing_targets(installed.lines());
    if missing.is_empty() {
        return Ok(missing);
    }

    info!("Adding Rust targets: {}", missing.join(", "));
    let add = with_toolchain(Invocation::new("rustup").args(["target", "add"]));
    runner.run(&add.args(missing.iter().copied()), env)?;
    Ok(missing)
}
