//! Minimal reading of the Android library's `build.gradle.kts`.

/// CMake version declared inside the `cmake { ... }` block, if any.
pub fn cmake_version(content: &str) -> Option<String> {
    let mut in_cmake = false;
    for raw in content.lines() {
        let line = raw.trim();
        if line.starts_with("cmake {") {
            in_cmake = true;
            continue;
        }
        if in_cmake && line.starts_with('}') {
            in_cmake = false;
            continue;
        }
        if in_cmake {
            if let Some(version) = quoted_assignment(line, "version") {
                return Some(version);
            }
        }
    }
    None
}

// Value of `<name> = "<value>"` anywhere in `line`.
fn quoted_assignment(line: &str, name: &str) -> Option<String> {
    line.match_indices(name).find_map(|(index, _)| {
        let rest = line[index + name.len()..].trim_start().strip_prefix('=')?;
        let rest = rest.trim_start().strip_prefix('"')?;
        let (value, _) = rest.split_once('"')?;
        (!value.is_empty()).then(|| value.to_string())
    })
}
