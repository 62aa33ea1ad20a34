use crate::domain::ReleaseRecord;
use crate::error::{BumpError, Result};
use crate::git::CommitInfo;
use chrono::{DateTime, Utc};
use git2::{Repository as Git2Repo, Sort, Time};
use std::path::Path;
use std::time::Instant;
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Tagger time for annotated tags, commit time for lightweight ones
    fn tag_time(&self, tag_name: &str) -> Result<Option<Time>> {
        let reference = self
            .repo
            .find_reference(&format!("refs/tags/{}", tag_name))?;

        if let Ok(tag) = reference.peel_to_tag() {
            if let Some(tagger) = tag.tagger() {
                return Ok(Some(tagger.when()));
            }
        }
        match reference.peel_to_commit() {
            Ok(commit) => Ok(Some(commit.time())),
            // tags on trees or blobs carry no date
            Err(_) => Ok(None),
        }
    }
}

impl super::Repository for Git2Repository {
    fn list_releases(&self) -> Result<Vec<ReleaseRecord>> {
        let start = Instant::now();
        let tags = self.repo.tag_names(None)?;

        let mut releases = Vec::with_capacity(tags.len());
        for name in tags.iter().flatten() {
            let mut record = ReleaseRecord::new(name);
            record.published_at = self
                .tag_time(name)?
                .and_then(|time| DateTime::<Utc>::from_timestamp(time.seconds(), 0));
            releases.push(record);
        }
        debug!("listing {} tags took {:?}", releases.len(), start.elapsed());

        Ok(releases)
    }

    fn remote_url(&self, remote: &str) -> Result<String> {
        let found = self
            .repo
            .find_remote(remote)
            .map_err(|e| BumpError::remote(format!("Cannot find remote '{}': {}", remote, e)))?;

        found
            .url()
            .map(|url| url.to_string())
            .ok_or_else(|| BumpError::remote(format!("Remote '{}' has no URL", remote)))
    }

    fn commits_since(&self, tag_name: &str) -> Result<Vec<CommitInfo>> {
        let start = Instant::now();
        let reference_name = format!("refs/tags/{}", tag_name);
        let tagged = self
            .repo
            .find_reference(&reference_name)
            .and_then(|reference| reference.peel_to_commit())
            .map_err(|e| BumpError::version(format!("Cannot find tag '{}': {}", tag_name, e)))?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push_head()?;
        revwalk.hide(tagged.id())?;

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;

            let message = commit.message().unwrap_or("(empty message)").to_string();
            let author = commit.author().name().unwrap_or("unknown").to_string();

            commits.push(CommitInfo {
                hash: oid.to_string(),
                message,
                author,
            });
        }

        debug!(
            "walking {} commits since {} took {:?}",
            commits.len(),
            tag_name,
            start.elapsed()
        );
        Ok(commits)
    }

    fn head_hash(&self) -> Result<String> {
        let head = self.repo.head()?.peel_to_commit()?;
        Ok(head.id().to_string())
    }
}
