//! Provision a build machine and publish the Android library.
//!
//! Steps run in a fixed order and the first failure aborts the run. Every step
//! receives the tool environment produced by the previous one, so tools
//! installed along the way are visible to everything spawned after them.

mod android_sdk;
mod credentials;
mod git_client;
mod gradle;
mod java;
mod python_env;
mod rust_toolchain;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::app::ProvisionContext;
use crate::domain::{AppError, HostPlatform, ProjectLayout, ToolEnv};
use crate::ports::{CredentialProvider, InstallerDownloader, ProcessRunner};

pub use android_sdk::SDK_ROOT_VARS;
pub use java::JAVA_HOME_VAR;
pub use rust_toolchain::{RUSTUP_INIT_URL, RUSTUP_TOOLCHAIN_VAR};

/// Default location of the runtime bundled with Android Studio on Windows.
pub const ANDROID_STUDIO_JBR: &str = r"C:\Program Files\Android\Android Studio\jbr";

/// Overrides the interpreter used to create the virtual environment.
pub const PYTHON_OVERRIDE_VAR: &str = "RELKIT_PYTHON";

#[derive(Debug, Clone)]
pub struct ProvisionOptions {
    pub project_dir: PathBuf,
    pub home_dir: PathBuf,
    /// Scratch directory for downloaded installers.
    pub temp_dir: PathBuf,
    pub platform: HostPlatform,
    /// Interpreter that creates the project virtual environment.
    pub host_python: String,
    pub android_studio_jbr: PathBuf,
}

impl ProvisionOptions {
    /// Options for the running host.
    pub fn detect(project_dir: impl Into<PathBuf>, env: &ToolEnv) -> Result<Self, AppError> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| AppError::config_error("Unable to determine the home directory"))?;
        let platform = HostPlatform::current();
        let host_python = env
            .non_empty(PYTHON_OVERRIDE_VAR)
            .unwrap_or(if platform.is_windows() { "python" } else { "python3" })
            .to_string();

        Ok(Self {
            project_dir: project_dir.into(),
            home_dir,
            temp_dir: std::env::temp_dir(),
            platform,
            host_python,
            android_studio_jbr: PathBuf::from(ANDROID_STUDIO_JBR),
        })
    }

    pub fn cargo_bin_dir(&self) -> PathBuf {
        self.home_dir.join(".cargo").join("bin")
    }

    /// User-level Gradle properties holding the registry credentials.
    pub fn gradle_user_properties(&self) -> PathBuf {
        self.home_dir.join(".gradle").join("gradle.properties")
    }
}

/// What a provisioning run configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionReport {
    /// Pinned Rust toolchain, when the project declares one.
    pub toolchain: Option<String>,
    /// Android targets added during this run.
    pub installed_targets: Vec<&'static str>,
    pub sdk_root: PathBuf,
    pub cmake_root: PathBuf,
    /// Whether registry credentials had to be written.
    pub credentials_written: bool,
}

/// Provision the machine and run the Gradle publish task.
pub fn execute<R, D, C>(
    ctx: &ProvisionContext<R, D, C>,
    options: &ProvisionOptions,
    env: ToolEnv,
) -> Result<ProvisionReport, AppError>
where
    R: ProcessRunner,
    D: InstallerDownloader,
    C: CredentialProvider,
{
    let layout = ProjectLayout::new(&options.project_dir, options.platform);
    let runner = ctx.runner();
    info!("Provisioning {} on {}", layout.root().display(), options.platform);

    let venv_python = python_env::ensure_venv(runner, &layout, &options.host_python, &env)?;
    python_env::install_dependencies(runner, &venv_python, &layout, &env)?;
    let env = env.with_path_prepended(&layout.venv_bin_dir());

    git_client::ensure(runner, options.platform, &env)?;
    let env = java::ensure(options.platform, &env, &options.android_studio_jbr);
    let env = rust_toolchain::ensure_cargo_ndk(ctx, options, env)?;

    let toolchain = rust_toolchain::read_pin(&layout)?;
    let env = rust_toolchain::apply_pin(runner, toolchain.as_deref(), env)?;
    let installed_targets = rust_toolchain::ensure_targets(runner, toolchain.as_deref(), &env)?;

    let (sdk_root, env) = android_sdk::ensure_sdk(options.platform, &layout, env)?;
    let (cmake_root, env) = android_sdk::ensure_cmake(&sdk_root, &layout, env)?;

    let credentials_written =
        credentials::ensure(ctx.credentials(), &options.gradle_user_properties())?;

    gradle::bootstrap_dependencies(runner, &venv_python, &layout, &env)?;
    gradle::clean_native_cache(&layout);
    gradle::publish(runner, options.platform, &layout, &env)?;

    Ok(ProvisionReport { toolchain, installed_targets, sdk_root, cmake_root, credentials_written })
}

/// Read a text file that is allowed to be absent.
fn read_optional(path: &Path) -> Result<Option<String>, AppError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}
