//! Semantic version state and the per-entry bump rules

use std::fmt;

use serde::{Deserialize, Serialize};

/// Substring marker that forces a major release bump
pub const RELEASE_TOKEN: &str = "--r";

/// Substring marker that forces a minor feature bump
pub const FEATURE_TOKEN: &str = "--f";

/// Persisted semantic version, serialized as the `[major, minor, patch]`
/// array stored under `app.version_number` in `glog.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "[u32; 3]", into = "[u32; 3]")]
pub struct VersionState {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl VersionState {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl From<[u32; 3]> for VersionState {
    fn from(parts: [u32; 3]) -> Self {
        Self {
            major: parts[0],
            minor: parts[1],
            patch: parts[2],
        }
    }
}

impl From<VersionState> for [u32; 3] {
    fn from(version: VersionState) -> Self {
        [version.major, version.minor, version.patch]
    }
}

impl fmt::Display for VersionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Apply one version bump for one collected entry.
///
/// Directive detection is a case-insensitive substring search over the raw
/// artifact body. Exactly one rule applies, in strict priority order:
/// release (`--r`) > feature (`--f`) > patch. The build number increments
/// unconditionally, once per entry.
pub fn bump(version: VersionState, build_number: u32, raw: &str) -> (VersionState, u32) {
    let build_number = build_number + 1;
    let content = raw.to_lowercase();

    let version = if content.contains(RELEASE_TOKEN) {
        VersionState::new(version.major + 1, 0, 0)
    } else if content.contains(FEATURE_TOKEN) {
        VersionState::new(version.major, version.minor + 1, 0)
    } else {
        VersionState::new(version.major, version.minor, version.patch + 1)
    };

    (version, build_number)
}
