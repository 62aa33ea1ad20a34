use crate::error::{BumpError, Result};
use semver::{BuildMetadata, Prerelease, Version};

/// Parse a version from a tag string (e.g., "v1.2.3-rc.1" -> 1.2.3-rc.1)
///
/// A single leading 'v' or 'V' is stripped, the rest must be a strict
/// semantic version.
pub fn parse_tag(tag: &str) -> Result<Version> {
    let clean_tag = tag
        .strip_prefix('v')
        .or_else(|| tag.strip_prefix('V'))
        .unwrap_or(tag);

    Version::parse(clean_tag)
        .map_err(|e| BumpError::version(format!("Invalid version tag '{}': {}", tag, e)))
}

/// Whether a version carries a pre-release component
pub fn has_prerelease(version: &Version) -> bool {
    !version.pre.is_empty()
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Patch,
    Minor,
    Major,
}

impl VersionBump {
    /// Bump kinds in the order candidates are offered
    pub const ALL: [VersionBump; 3] = [VersionBump::Patch, VersionBump::Minor, VersionBump::Major];

    /// Apply this bump to a version
    ///
    /// Increments the appropriate component and resets lower components to 0.
    /// Pre-release and build metadata are cleared.
    pub fn apply(self, version: &Version) -> Version {
        let mut next = match self {
            VersionBump::Major => Version::new(version.major + 1, 0, 0),
            VersionBump::Minor => Version::new(version.major, version.minor + 1, 0),
            VersionBump::Patch => Version::new(version.major, version.minor, version.patch + 1),
        };
        next.pre = Prerelease::EMPTY;
        next.build = BuildMetadata::EMPTY;
        next
    }
}

/// Return the final release a pre-release leads up to (1.3.0-rc.2 -> 1.3.0)
pub fn finalize(version: &Version) -> Version {
    Version::new(version.major, version.minor, version.patch)
}

/// Return `version` with its pre-release replaced by `pre`
///
/// Build metadata is dropped.
///
/// # Returns
/// * `Ok(Version)` - The version with the new pre-release
/// * `Err` - If `pre` is not a valid semver pre-release identifier
pub fn with_prerelease(version: &Version, pre: &str) -> Result<Version> {
    let pre = Prerelease::new(pre)
        .map_err(|e| BumpError::version(format!("Invalid pre-release '{}': {}", pre, e)))?;

    let mut next = finalize(version);
    next.pre = pre;
    Ok(next)
}
