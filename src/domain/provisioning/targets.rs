//! Rust targets needed to cross-compile the native library for every Android ABI.

use std::collections::BTreeSet;

pub const REQUIRED_ANDROID_TARGETS: [&str; 4] = [
    "aarch64-linux-android",
    "armv7-linux-androideabi",
    "i686-linux-android",
    "x86_64-linux-android",
];

/// Required targets absent from `installed`, sorted.
pub fn missing_targets<'a, I>(installed: I) -> Vec<&'static str>
where
    I: IntoIterator<Item = &'a str>,
{
    let installed: BTreeSet<&str> = installed.into_iter().map(str::trim).collect();
    let required: BTreeSet<&'static str> = REQUIRED_ANDROID_TARGETS.into_iter().collect();
    required.into_iter().filter(|target| !installed.contains(target)).collect()
}
