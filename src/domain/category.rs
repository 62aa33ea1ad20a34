//! Structural classification of versions
//!
//! The category is derived purely from the fields of a version, not from how
//! it was reached: `2.0.0` is `Major` whether or not the previous release was
//! `1.x`.

use semver::Version;
use std::fmt;

use super::version::has_prerelease;

/// Category of a version by its structural role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionCategory {
    Patch,
    Minor,
    Major,
    PrePatch,
    PreMinor,
    PreMajor,
}

impl VersionCategory {
    /// Classify a version.
    ///
    /// A non-empty pre-release makes it a `Pre*` category. Within each group,
    /// a nonzero patch means Patch, else a nonzero minor means Minor, else
    /// Major. `0.0.0` is Major.
    pub fn classify(version: &Version) -> Self {
        let pre = has_prerelease(version);
        match (pre, version.minor, version.patch) {
            (false, _, p) if p != 0 => VersionCategory::Patch,
            (false, m, _) if m != 0 => VersionCategory::Minor,
            (false, _, _) => VersionCategory::Major,
            (true, _, p) if p != 0 => VersionCategory::PrePatch,
            (true, m, _) if m != 0 => VersionCategory::PreMinor,
            (true, _, _) => VersionCategory::PreMajor,
        }
    }

    /// Static human-readable rationale for choosing this kind of release
    pub fn describe(self) -> &'static str {
        match self {
            VersionCategory::Major => "incompatible API changes",
            VersionCategory::Minor => "backwards-compatible new functionality",
            VersionCategory::Patch => "backwards-compatible bug fixes",
            VersionCategory::PreMajor => "incompatible API changes, as a pre-release",
            VersionCategory::PreMinor => "backwards-compatible new functionality, as a pre-release",
            VersionCategory::PrePatch => "backwards-compatible bug fixes, as a pre-release",
        }
    }
}

impl fmt::Display for VersionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VersionCategory::Patch => "Patch",
            VersionCategory::Minor => "Minor",
            VersionCategory::Major => "Major",
            VersionCategory::PrePatch => "PrePatch",
            VersionCategory::PreMinor => "PreMinor",
            VersionCategory::PreMajor => "PreMajor",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(s: &str) -> VersionCategory {
        VersionCategory::classify(&Version::parse(s).unwrap())
    }

    #[test]
    fn test_classify_table() {
        let cases = [
            ("1.2.3", VersionCategory::Patch),
            ("1.2.0", VersionCategory::Minor),
            ("1.0.0", VersionCategory::Major),
            ("0.0.1", VersionCategory::Patch),
            ("1.2.3-rc.1", VersionCategory::PrePatch),
            ("1.2.0-foo", VersionCategory::PreMinor),
            ("2.0.0-dev1", VersionCategory::PreMajor),
        ];
        for (input, want) in cases {
            assert_eq!(classify(input), want, "classify({})", input);
        }
    }

    #[test]
    fn test_classify_zero_is_major() {
        assert_eq!(classify("0.0.0"), VersionCategory::Major);
    }

    #[test]
    fn test_classify_ignores_build_metadata() {
        assert_eq!(classify("1.2.0+build.7"), VersionCategory::Minor);
    }

    #[test]
    fn test_classify_structural_not_historical() {
        // 0.1.0 is reached by a minor bump but 2.0.0 always reads as Major
        assert_eq!(classify("0.1.0"), VersionCategory::Minor);
        assert_eq!(classify("2.0.0"), VersionCategory::Major);
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            VersionCategory::Patch.describe(),
            "backwards-compatible bug fixes"
        );
        assert!(VersionCategory::PrePatch.describe().ends_with("pre-release"));
    }

    #[test]
    fn test_display() {
        assert_eq!(VersionCategory::PreMinor.to_string(), "PreMinor");
        assert_eq!(VersionCategory::Patch.to_string(), "Patch");
    }
}
