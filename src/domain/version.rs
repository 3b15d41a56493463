use std::cmp::Ordering;

/// Ordering key for SDK tool directory names such as `3.22.1` or `36.0.0-rc1`.
///
/// The name is split on `.` and `-`; numeric tokens are kept until the first
/// non-numeric one, so pre-release suffixes do not take part in the ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ToolVersion {
    parts: Vec<u64>,
}

impl ToolVersion {
    pub fn parse(s: &str) -> Self {
        let parts = s.split(['.', '-']).map_while(|token| token.parse::<u64>().ok()).collect();
        Self { parts }
    }

    pub fn parts(&self) -> &[u64] {
        &self.parts
    }
}

/// Pick the directory name to use from the available SDK tool versions.
///
/// An exact match on `preferred` wins; otherwise the highest `ToolVersion`,
/// with the name itself breaking ties.
pub fn select_version<'a>(names: &'a [String], preferred: Option<&str>) -> Option<&'a str> {
    if let Some(preferred) = preferred {
        if let Some(exact) = names.iter().find(|name| name.as_str() == preferred) {
            return Some(exact);
        }
    }

    names.iter().max_by(|left, right| compare_names(left, right)).map(String::as_str)
}

fn compare_names(left: &str, right: &str) -> Ordering {
    ToolVersion::parse(left).cmp(&ToolVersion::parse(right)).then_with(|| left.cmp(right))
}
