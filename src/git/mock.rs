use crate::domain::ReleaseRecord;
use crate::error::{BumpError, Result};
use crate::git::{CommitInfo, Repository};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
///
/// Commits are stored newest first, and every tag "points" at an index into
/// that list: `commits_since(tag)` returns everything newer than it.
pub struct MockRepository {
    commits: Vec<CommitInfo>,
    tags: Vec<(ReleaseRecord, usize)>,
    remotes: HashMap<String, String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: Vec::new(),
            tags: Vec::new(),
            remotes: HashMap::new(),
        }
    }

    /// Add a commit on top of HEAD
    pub fn add_commit(&mut self, info: CommitInfo) {
        self.commits.insert(0, info);
    }

    /// Tag the current HEAD
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push((ReleaseRecord::new(name), self.commits.len()));
    }

    /// Tag the current HEAD with a publish date
    pub fn add_tag_at(&mut self, name: impl Into<String>, published_at: DateTime<Utc>) {
        let mut record = ReleaseRecord::new(name);
        record.published_at = Some(published_at);
        self.tags.push((record, self.commits.len()));
    }

    /// Configure a remote URL
    pub fn set_remote(&mut self, name: impl Into<String>, url: impl Into<String>) {
        self.remotes.insert(name.into(), url.into());
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_releases(&self) -> Result<Vec<ReleaseRecord>> {
        Ok(self.tags.iter().map(|(record, _)| record.clone()).collect())
    }

    fn remote_url(&self, remote: &str) -> Result<String> {
        self.remotes
            .get(remote)
            .cloned()
            .ok_or_else(|| BumpError::remote(format!("Cannot find remote '{}'", remote)))
    }

    fn commits_since(&self, tag_name: &str) -> Result<Vec<CommitInfo>> {
        let (_, depth) = self
            .tags
            .iter()
            .find(|(record, _)| record.tag_name == tag_name)
            .ok_or_else(|| BumpError::version(format!("Cannot find tag '{}'", tag_name)))?;

        let newer = self.commits.len() - depth;
        Ok(self.commits[..newer].to_vec())
    }

    fn head_hash(&self) -> Result<String> {
        Ok(self
            .commits
            .first()
            .map(|c| c.hash.clone())
            .unwrap_or_default())
    }
}
