use std::path::{Path, PathBuf};

use crate::domain::HostPlatform;

/// Well-known locations inside the library repository.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
    platform: HostPlatform,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>, platform: HostPlatform) -> Self {
        Self { root: root.into(), platform }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn venv_dir(&self) -> PathBuf {
        self.root.join("env")
    }

    pub fn venv_bin_dir(&self) -> PathBuf {
        if self.platform.is_windows() {
            self.venv_dir().join("Scripts")
        } else {
            self.venv_dir().join("bin")
        }
    }

    pub fn venv_python(&self) -> PathBuf {
        if self.platform.is_windows() {
            self.venv_bin_dir().join("python.exe")
        } else {
            self.venv_bin_dir().join("python")
        }
    }

    pub fn requirements(&self) -> PathBuf {
        self.root.join("scripts").join("requirements.txt")
    }

    pub fn bootstrap_script(&self) -> PathBuf {
        self.root.join("scripts").join("bootstrap_conan_deps.py")
    }

    pub fn toolchain_file(&self) -> PathBuf {
        self.root.join("rust-toolchain.toml")
    }

    pub fn legacy_toolchain_file(&self) -> PathBuf {
        self.root.join("rust-toolchain")
    }

    pub fn android_dir(&self) -> PathBuf {
        self.root.join("platform").join("android")
    }

    pub fn local_properties(&self) -> PathBuf {
        self.android_dir().join("local.properties")
    }

    pub fn gradle_build_file(&self) -> PathBuf {
        self.android_dir().join("lib").join("build.gradle.kts")
    }

    /// CMake output cached by the Android Gradle plugin.
    pub fn native_build_cache(&self) -> PathBuf {
        self.android_dir().join("lib").join(".cxx")
    }
}
