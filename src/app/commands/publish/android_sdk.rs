use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::read_optional;
use crate::adapters::PropertiesFile;
use crate::domain::provisioning::gradle_config;
use crate::domain::version::select_version;
use crate::domain::{AppError, HostPlatform, ProjectLayout, ProvisioningError, ToolEnv};

/// Variables consulted for the SDK location, in priority order.
pub const SDK_ROOT_VARS: [&str; 2] = ["ANDROID_SDK_ROOT", "ANDROID_HOME"];

const LOCAL_APP_DATA_VAR: &str = "LOCALAPPDATA";
const SDK_DIR_PROPERTY: &str = "sdk.dir";
const CMAKE_DIR_PROPERTY: &str = "cmake.dir";

pub(super) fn find_sdk_root(platform: HostPlatform, env: &ToolEnv) -> Option<PathBuf> {
    if let Some(root) = SDK_ROOT_VARS.iter().find_map(|var| env.non_empty(var)) {
        return Some(PathBuf::from(root));
    }
    if !platform.is_windows() {
        return None;
    }
    let sdk = Path::new(env.non_empty(LOCAL_APP_DATA_VAR)?).join("Android").join("Sdk");
    sdk.exists().then_some(sdk)
}

/// Locate the SDK, export it to the tool environment and record it for Gradle.
pub(super) fn ensure_sdk(
    platform: HostPlatform,
    layout: &ProjectLayout,
    env: ToolEnv,
) -> Result<(PathBuf, ToolEnv), AppError> {
    let sdk_root = find_sdk_root(platform, &env).ok_or(ProvisioningError::SdkNotFound)?;
    info!("Android SDK: {}", sdk_root.display());

    let root = sdk_root.to_string_lossy().into_owned();
    let env = SDK_ROOT_VARS.iter().fold(env, |env, var| env.with_var_if_absent(var, root.as_str()));

    let properties = PropertiesFile::new(layout.local_properties());
    if !properties.read()?.contains_key(SDK_DIR_PROPERTY) {
        properties.upsert(SDK_DIR_PROPERTY, &forward_slashes(&sdk_root))?;
    }
    Ok((sdk_root, env))
}

/// Pick the SDK CMake matching the Gradle build, falling back to the newest one.
pub(super) fn ensure_cmake(
    sdk_root: &Path,
    layout: &ProjectLayout,
    env: ToolEnv,
) -> Result<(PathBuf, ToolEnv), AppError> {
    let gradle = read_optional(&layout.gradle_build_file())?;
    let preferred = gradle.as_deref().and_then(gradle_config::cmake_version);

    let cmake_dir = sdk_root.join("cmake");
    let available = subdirectories(&cmake_dir)?;
    let Some(selected) = select_version(&available, preferred.as_deref()) else {
        return Err(ProvisioningError::CmakeNotFound(cmake_dir).into());
    };

    if let Some(preferred) = preferred.as_deref().filter(|preferred| *preferred != selected) {
        warn!("CMake {} requested by Gradle is not installed, using {}", preferred, selected);
    }

    let cmake_root = cmake_dir.join(selected);
    info!("CMake: {}", cmake_root.display());
    PropertiesFile::new(layout.local_properties())
        .upsert(CMAKE_DIR_PROPERTY, &forward_slashes(&cmake_root))?;

    let env = env.with_path_prepended(&cmake_root.join("bin"));
    Ok((cmake_root, env))
}

fn subdirectories(dir: &Path) -> Result<Vec<String>, AppError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
            names.push(name.to_string());
        }
    }
    Ok(names)
}

// Gradle reads local.properties on every platform; backslashes would be escapes.
fn forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
