//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user interaction.

use chrono::{DateTime, Utc};
use console::style;
use semver::Version;

use crate::boundary::BoundaryWarning;
use crate::domain::VersionCategory;
use crate::remote::GitHubRepo;

/// A candidate next version as presented to the user
#[derive(Debug, Clone, PartialEq)]
pub struct VersionOption {
    /// Lowercased category name (e.g., "patch", "preminor")
    pub name: String,
    pub version: Version,
    pub description: &'static str,
}

impl VersionOption {
    /// Label a candidate version with its category
    pub fn new(version: Version) -> Self {
        let category = VersionCategory::classify(&version);
        VersionOption {
            name: category.to_string().to_lowercase(),
            version,
            description: category.describe(),
        }
    }

    /// Plain "name (version)" label without styling
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.version)
    }
}

/// Build display options for a list of candidate versions, keeping order.
pub fn version_options(candidates: &[Version]) -> Vec<VersionOption> {
    candidates.iter().cloned().map(VersionOption::new).collect()
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("\x1b[33m⚠ WARNING:\x1b[0m {}", warning);
}

/// Format the publish date of a release (e.g., "2006 Jan 2")
pub fn format_published(published_at: DateTime<Utc>) -> String {
    published_at.format("%Y %b %-d").to_string()
}

/// Display the release the next version will follow.
///
/// Shows the most recent full release too when it differs from the latest.
///
/// # Arguments
/// * `repo` - The GitHub repository
/// * `latest` - Most recent release, pre-releases included
/// * `published_at` - When `latest` was tagged, if known
/// * `full` - Most recent release that is not a pre-release
pub fn display_latest_release(
    repo: &GitHubRepo,
    latest: &Version,
    published_at: Option<DateTime<Utc>>,
    full: Option<&Version>,
) {
    let published = published_at
        .map(|date| format!(" (published {})", format_published(date)))
        .unwrap_or_default();
    println!(
        "🌻 Latest release of {}{}",
        style(format!("{}: {}", repo, latest)).bold(),
        published
    );
    if let Some(full) = full.filter(|full| *full != latest) {
        println!(
            "   {}",
            style(format!("(most recent full release: {})", full)).dim()
        );
    }
}

/// Print a rendered changelog as-is.
pub fn display_changelog(changelog: &str) {
    println!("{}", changelog);
}

/// Display the candidate versions as a numbered list.
pub fn display_version_options(options: &[VersionOption]) {
    println!(
        "\n{}",
        style("Select semver increment to specify next version").bold()
    );
    for (i, option) in options.iter().enumerate() {
        println!(
            "  {}. {}{}  {}",
            i + 1,
            option.name,
            style(format!(" ({})", option.version)).dim(),
            style(format!("{}.", option.description)).dim()
        );
    }
}

/// Display the URL for drafting the release when the browser is not opened.
pub fn display_draft_url(url: &str) {
    println!("To draft release, visit: {}", url);
}
