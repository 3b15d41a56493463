//! Toolchain channel pins (`rust-toolchain.toml` and the legacy `rust-toolchain`).

/// Channel from a `rust-toolchain.toml` document: `[toolchain] channel`, or a
/// top-level `channel` key.
pub fn from_toml(content: &str) -> Option<String> {
    let document: toml::Table = content.parse().ok()?;
    let channel = document
        .get("toolchain")
        .and_then(|toolchain| toolchain.get("channel"))
        .or_else(|| document.get("channel"))?;
    channel.as_str().map(str::trim).filter(|value| !value.is_empty()).map(str::to_string)
}

/// Channel from a legacy `rust-toolchain` file: its first non-blank,
/// non-comment line.
pub fn from_legacy(content: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
}
