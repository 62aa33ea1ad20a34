use std::fmt;

/// Warnings that occur while gathering release data.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No tag in the repository is a semantic version
    NoReleases { tag_count: usize },
    /// No new commits since the latest release
    NoNewCommits {
        latest_tag: String,
        current_commit_hash: String,
    },
    /// Remote exists but does not point at GitHub
    RemoteNotGitHub { remote: String, url: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoReleases { tag_count } => {
                write!(
                    f,
                    "No semantic version releases found among {} tag(s)",
                    tag_count
                )
            }
            BoundaryWarning::NoNewCommits {
                latest_tag,
                current_commit_hash,
            } => {
                let short_hash = current_commit_hash
                    .get(..7)
                    .unwrap_or(current_commit_hash.as_str());
                write!(
                    f,
                    "No new commits since tag '{}' (current: {})",
                    latest_tag, short_hash
                )
            }
            BoundaryWarning::RemoteNotGitHub { remote, url } => {
                write!(f, "Remote '{}' is not a GitHub repository: {}", remote, url)
            }
        }
    }
}
