//! Changelog text and GitHub URLs for a proposed release

use semver::Version;
use std::fmt::Write;

use crate::git::CommitInfo;
use crate::remote::GitHubRepo;

/// Most commits listed on screen before the rest is summarized
pub const MAX_SCREEN_COMMITS: usize = 10;

/// Formats commits for display on screen, abbreviated to fit an 80x24 terminal.
///
/// Only the [`MAX_SCREEN_COMMITS`] most recent subjects are listed; the rest
/// are summarized with a link where the full list can be viewed.
///
/// # Arguments
/// * `commits` - Commits since the previous release, newest first
/// * `compare_url` - URL showing the full comparison
pub fn render_screen(commits: &[CommitInfo], compare_url: &str) -> String {
    let mut buf = String::from("Changes since previous release:\n\n");

    for commit in commits.iter().take(MAX_SCREEN_COMMITS) {
        let _ = writeln!(buf, "  - {}", commit.subject());
    }

    let extra = commits.len().saturating_sub(MAX_SCREEN_COMMITS);
    if extra > 0 {
        let _ = writeln!(buf, "\n...{} more commits, {}", extra, compare_url);
    }

    buf
}

/// Formats commits as GitHub Flavored Markdown release notes.
pub fn render_markdown(commits: &[CommitInfo]) -> String {
    let mut buf = String::from("## Changelog\n\n");

    for commit in commits {
        let _ = writeln!(buf, "- {} {}", commit.subject(), commit.short_hash());
    }

    buf
}

/// GitHub web view comparing two tagged versions
pub fn comparison_url(repo: &GitHubRepo, base: &Version, next: &Version) -> String {
    format!("{}/compare/v{}...v{}", repo.web_url(), base, next)
}

/// GitHub web view comparing a tagged version against HEAD
pub fn head_comparison_url(repo: &GitHubRepo, base: &Version) -> String {
    format!("{}/compare/v{}...HEAD", repo.web_url(), base)
}

/// URL opening a new draft release for `version`, prefilled with `body`
pub fn draft_release_url(repo: &GitHubRepo, version: &Version, body: &str) -> String {
    format!(
        "{}/releases/new?tag=v{}&title=v{}&body={}",
        repo.web_url(),
        version,
        version,
        urlencoding::encode(body)
    )
}

/// Release notes body for the draft: markdown changelog plus comparison link
pub fn release_body(
    repo: &GitHubRepo,
    commits: &[CommitInfo],
    base: &Version,
    next: &Version,
) -> String {
    [render_markdown(commits), comparison_url(repo, base, next)].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commits(n: usize) -> Vec<CommitInfo> {
        (0..n)
            .map(|i| CommitInfo {
                hash: format!("{:040x}", i),
                message: format!("commit {}\n\nbody", i),
                author: "Author".to_string(),
            })
            .collect()
    }

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_render_screen_few_commits() {
        let out = render_screen(&commits(2), "URL");
        assert_eq!(
            out,
            "Changes since previous release:\n\n  - commit 0\n  - commit 1\n"
        );
    }

    #[test]
    fn test_render_screen_truncates() {
        let out = render_screen(&commits(13), "https://example/compare");
        assert_eq!(out.matches("  - commit").count(), MAX_SCREEN_COMMITS);
        assert!(out.ends_with("\n...3 more commits, https://example/compare\n"));
    }

    #[test]
    fn test_render_screen_exactly_max() {
        let out = render_screen(&commits(MAX_SCREEN_COMMITS), "URL");
        assert!(!out.contains("more commits"));
    }

    #[test]
    fn test_render_markdown() {
        let out = render_markdown(&commits(1));
        assert_eq!(out, "## Changelog\n\n- commit 0 0000000\n");
    }

    #[test]
    fn test_comparison_url() {
        let repo = GitHubRepo::new("mroth", "bump");
        assert_eq!(
            comparison_url(&repo, &v("1.2.3"), &v("1.3.0")),
            "https://github.com/mroth/bump/compare/v1.2.3...v1.3.0"
        );
        assert_eq!(
            head_comparison_url(&repo, &v("1.2.3")),
            "https://github.com/mroth/bump/compare/v1.2.3...HEAD"
        );
    }

    #[test]
    fn test_draft_release_url_encodes_body() {
        let repo = GitHubRepo::new("mroth", "bump");
        let url = draft_release_url(&repo, &v("1.3.0-rc.1"), "## Changelog\n\n- a & b");
        assert_eq!(
            url,
            "https://github.com/mroth/bump/releases/new?tag=v1.3.0-rc.1&title=v1.3.0-rc.1\
             &body=%23%23%20Changelog%0A%0A-%20a%20%26%20b"
        );
    }

    #[test]
    fn test_release_body() {
        let repo = GitHubRepo::new("o", "r");
        let body = release_body(&repo, &commits(1), &v("1.0.0"), &v("1.0.1"));
        assert!(body.starts_with("## Changelog"));
        assert!(body.ends_with("https://github.com/o/r/compare/v1.0.0...v1.0.1"));
    }
}
