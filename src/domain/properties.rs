//! `key=value` properties text, as used by Gradle.

use std::collections::BTreeMap;

/// Parse properties text into a key/value map.
///
/// Blank lines, `#` comments and lines without `=` are ignored. Keys and values
/// are trimmed; a repeated key keeps its last value.
pub fn parse(content: &str) -> BTreeMap<String, String> {
    content
        .lines()
        .filter_map(entry)
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Set `key` to `value`, replacing the first existing entry in place or
/// appending a new line. The result always ends with a newline.
pub fn upsert(content: Option<&str>, key: &str, value: &str) -> String {
    let line = format!("{key}={value}");
    let mut lines: Vec<String> = content.unwrap_or_default().lines().map(str::to_string).collect();

    match lines.iter().position(|existing| entry(existing).is_some_and(|(k, _)| k == key)) {
        Some(index) => lines[index] = line,
        None => lines.push(line),
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

fn entry(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim()))
}
