//! Picking the most recent releases out of a set of tags
//!
//! Releases are ranked by semver precedence only. Publish timestamps are not
//! trusted because tags get republished or backfilled out of order, and a
//! source's own "prerelease" flag is not trusted because people maintaining
//! releases by hand rarely set it.

use chrono::{DateTime, Utc};
use semver::Version;
use tracing::{debug, warn};

use super::version::{has_prerelease, parse_tag};

/// A release as observed from an external source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRecord {
    pub tag_name: String,
    pub published_at: Option<DateTime<Utc>>,
    /// What the source claims. Never consulted when resolving.
    pub source_declared_prerelease: bool,
}

impl ReleaseRecord {
    /// Create a record for a tag with no extra metadata
    pub fn new(tag_name: impl Into<String>) -> Self {
        ReleaseRecord {
            tag_name: tag_name.into(),
            published_at: None,
            source_declared_prerelease: false,
        }
    }
}

/// Most recent releases of a release set
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReleaseSet {
    /// Most recent release that is not a pre-release
    pub full: Option<Version>,
    /// Most recent release, pre-releases included
    pub latest: Option<Version>,
}

impl ReleaseSet {
    /// True when no tag could be parsed
    pub fn is_empty(&self) -> bool {
        self.latest.is_none()
    }
}

/// Most recent releases of a set of [`ReleaseRecord`]s
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordSet<'a> {
    pub full: Option<&'a ReleaseRecord>,
    pub latest: Option<&'a ReleaseRecord>,
}

/// Resolves `full` and `latest` from raw release tags
#[derive(Debug, Clone, Copy, Default)]
pub struct ReleaseSetResolver;

impl ReleaseSetResolver {
    pub fn new() -> Self {
        ReleaseSetResolver
    }

    /// Resolve the most recent releases from raw tag names.
    ///
    /// Tags that are not semantic versions (an optional leading `v` is
    /// accepted) are skipped with a warning. Both fields are `None` when
    /// nothing parses.
    ///
    /// Among tags of equal precedence (differing only in build metadata) the
    /// one seen first in the input wins.
    ///
    /// # Example
    /// ```
    /// use bump::domain::ReleaseSetResolver;
    ///
    /// let set = ReleaseSetResolver::new().resolve(["v2.0.0", "v2.1.0-rc.1", "junk"]);
    /// assert_eq!(set.latest.unwrap().to_string(), "2.1.0-rc.1");
    /// assert_eq!(set.full.unwrap().to_string(), "2.0.0");
    /// ```
    pub fn resolve<I, S>(&self, tags: I) -> ReleaseSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ranked = rank(tags.into_iter().enumerate().filter_map(|(i, tag)| {
            parse_or_warn(tag.as_ref()).map(|version| (version, i))
        }));

        ReleaseSet {
            latest: ranked.first().map(|(version, _)| version.clone()),
            full: ranked
                .iter()
                .find(|(version, _)| !has_prerelease(version))
                .map(|(version, _)| version.clone()),
        }
    }

    /// Resolve the most recent releases from release records.
    ///
    /// Same rules as [`resolve`](Self::resolve), but returns the winning
    /// records so callers keep the original tag spelling and metadata.
    pub fn resolve_records<'a>(&self, records: &'a [ReleaseRecord]) -> RecordSet<'a> {
        let ranked = rank(records.iter().enumerate().filter_map(|(i, record)| {
            parse_or_warn(&record.tag_name).map(|version| (version, i))
        }));

        RecordSet {
            latest: ranked.first().map(|&(_, i)| &records[i]),
            full: ranked
                .iter()
                .find(|(version, _)| !has_prerelease(version))
                .map(|&(_, i)| &records[i]),
        }
    }
}

fn parse_or_warn(tag: &str) -> Option<Version> {
    match parse_tag(tag) {
        Ok(version) => Some(version),
        Err(_) => {
            warn!("cannot parse {} as valid semver, ignoring", tag);
            None
        }
    }
}

/// Sort parsed versions by descending precedence, keeping input order on ties.
fn rank(parsed: impl Iterator<Item = (Version, usize)>) -> Vec<(Version, usize)> {
    let mut ranked: Vec<(Version, usize)> = parsed.collect();
    ranked.sort_by(|(a, _), (b, _)| b.cmp_precedence(a));
    debug!(
        "releases ordered by precedence: {:?}",
        ranked.iter().map(|(v, _)| v.to_string()).collect::<Vec<_>>()
    );
    ranked
}
