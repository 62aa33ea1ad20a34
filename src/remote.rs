//! GitHub remote detection

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// HTTPS and SSH forms of a github.com remote
const GITHUB_REMOTE_PATTERN: &str = r"^(?:https://|git@)github\.com[:/](.+)/(.+?)(?:\.git)?$";

fn github_remote_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(GITHUB_REMOTE_PATTERN).expect("GitHub remote pattern is valid"))
}

/// Owner and name of a GitHub repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubRepo {
    pub owner: String,
    pub repo: String,
}

impl GitHubRepo {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        GitHubRepo {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Web URL of the repository
    pub fn web_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.repo)
    }
}

impl fmt::Display for GitHubRepo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Parses a remote URL against known GitHub remote patterns.
///
/// Supported formats (HTTPS/SSH):
/// - `https://github.com/mroth/bump.git`
/// - `git@github.com:mroth/bump.git`
///
/// The `.git` suffix is optional.
///
/// # Returns
/// * `Some(GitHubRepo)` - If the URL points at github.com
/// * `None` - Otherwise
pub fn parse_github_remote(remote_url: &str) -> Option<GitHubRepo> {
    let captures = github_remote_regex().captures(remote_url.trim())?;

    let owner = captures.get(1)?.as_str();
    let repo = captures.get(2)?.as_str();
    Some(GitHubRepo::new(owner, repo))
}
