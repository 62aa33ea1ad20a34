//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the few read-only Git
//! operations bump needs, allowing for a real implementation and a mock one
//! for testing.
//!
//! # Overview
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: An in-memory implementation for testing
//!
//! Code that only needs tags and commits should depend on the [Repository]
//! trait rather than a concrete implementation.
//!
//! ```rust
//! # use bump::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let releases = repo.list_releases()?;
//! let commits = repo.commits_since(&releases[0].tag_name)?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::ReleaseRecord;
use crate::error::Result;

/// Commit information for changelog rendering
#[derive(Debug, Clone, PartialEq)]
pub struct CommitInfo {
    /// The full commit hash
    pub hash: String,
    /// The commit message
    pub message: String,
    /// The commit author
    pub author: String,
}

impl CommitInfo {
    /// First line of the commit message
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Hash abbreviated to seven characters
    pub fn short_hash(&self) -> &str {
        self.hash.get(..7).unwrap_or(&self.hash)
    }
}

/// Read-only git operations needed to propose a release
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations map
/// underlying errors (like `git2::Error`) to [crate::error::BumpError].
pub trait Repository {
    /// Get a release record for every tag in the repository
    ///
    /// `published_at` is the tagger date of an annotated tag, or the commit
    /// date of a lightweight one. Order is unspecified; callers rank tags
    /// themselves.
    fn list_releases(&self) -> Result<Vec<ReleaseRecord>>;

    /// Get the first configured URL of a remote
    ///
    /// # Arguments
    /// * `remote` - Name of the remote (e.g., "origin")
    ///
    /// # Returns
    /// * `Ok(String)` - The remote URL
    /// * `Err` - If the remote doesn't exist or has no URL
    fn remote_url(&self, remote: &str) -> Result<String>;

    /// Get commits reachable from HEAD but not from a tag
    ///
    /// Equivalent to `git log <tag>..HEAD`: newest commit first.
    ///
    /// # Arguments
    /// * `tag_name` - Tag marking the previous release (e.g., "v1.2.3")
    fn commits_since(&self, tag_name: &str) -> Result<Vec<CommitInfo>>;

    /// Get the full hash of the current HEAD commit
    fn head_hash(&self) -> Result<String>;
}
