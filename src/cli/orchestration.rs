//! Main workflow orchestration logic
//!
//! Wires the pure version rules to the repository, the terminal and the
//! GitHub URLs. Kept apart from `main.rs` so it can be driven with a
//! [`MockRepository`](crate::git::MockRepository) and a scripted chooser.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use semver::Version;
use tracing::debug;

use crate::boundary::BoundaryWarning;
use crate::changelog;
use crate::config::Config;
use crate::domain::{parse_tag, NextVersionSuggester, ReleaseSetResolver};
use crate::error::BumpError;
use crate::git::Repository;
use crate::remote::{parse_github_remote, GitHubRepo};
use crate::ui::{self, VersionChooser};

use super::args::Args;

/// Arguments for the bump workflow
///
/// Decoupled from the clap `Args` so the workflow can be called
/// programmatically.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpWorkflowArgs {
    /// Explicit GitHub repository; detected from `remote` when absent
    pub github: Option<GitHubRepo>,

    /// Git remote used for detection
    pub remote: String,

    /// Offer versions starting a new pre-release train
    pub include_initial_prereleases: bool,
}

impl BumpWorkflowArgs {
    /// Merge command-line arguments over configuration values
    pub fn from_cli(args: &Args, config: &Config) -> Self {
        let github = match (&args.owner, &args.repo) {
            (Some(owner), Some(repo)) => Some(GitHubRepo::new(owner, repo)),
            _ => None,
        };

        BumpWorkflowArgs {
            github,
            remote: args.remote.clone().unwrap_or_else(|| config.remote.clone()),
            include_initial_prereleases: args.prerelease
                || config.behavior.include_initial_prereleases,
        }
    }
}

/// Result of a successful bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub github: GitHubRepo,

    /// The release the new version follows
    pub previous: Version,

    /// When `previous` was tagged, if known
    pub previous_published_at: Option<DateTime<Utc>>,

    /// The version chosen by the user
    pub next: Version,

    /// URL opening a prefilled draft release
    pub draft_url: String,
}

/// Main bump workflow
///
/// 1. Determine the GitHub repository
/// 2. Resolve the latest releases from the repository tags
/// 3. Show the changes since the latest release
/// 4. Offer candidate next versions and let the chooser pick one
/// 5. Build the draft release URL
///
/// # Returns
///
/// The chosen version and draft URL, or an error if there is no release to
/// start from or the chooser fails.
pub fn run_bump_workflow<R, C>(
    args: &BumpWorkflowArgs,
    config: &Config,
    repo: &R,
    chooser: &mut C,
) -> Result<WorkflowResult>
where
    R: Repository,
    C: VersionChooser,
{
    let github = match &args.github {
        Some(github) => github.clone(),
        None => detect_github(repo, &args.remote)?,
    };
    debug!("using GitHub repository {}", github);

    let records = repo.list_releases()?;
    let resolved = ReleaseSetResolver::new().resolve_records(&records);

    let Some(latest_record) = resolved.latest else {
        ui::display_boundary_warning(&BoundaryWarning::NoReleases {
            tag_count: records.len(),
        });
        return Err(BumpError::EmptyReleaseSet.into());
    };
    let latest = parse_tag(&latest_record.tag_name)?;
    let full = resolved
        .full
        .map(|record| parse_tag(&record.tag_name))
        .transpose()?;
    ui::display_latest_release(&github, &latest, latest_record.published_at, full.as_ref());

    let commits = repo
        .commits_since(&latest_record.tag_name)
        .with_context(|| format!("failed to retrieve commits since {}", latest_record.tag_name))?;
    if commits.is_empty() {
        ui::display_boundary_warning(&BoundaryWarning::NoNewCommits {
            latest_tag: latest_record.tag_name.clone(),
            current_commit_hash: repo.head_hash()?,
        });
    }
    ui::display_changelog(&changelog::render_screen(
        &commits,
        &changelog::head_comparison_url(&github, &latest),
    ));

    let suggester = NextVersionSuggester::new(config.prerelease.clone());
    let candidates = suggester.suggest(&latest, args.include_initial_prereleases)?;
    let options = ui::version_options(&candidates);
    let index = chooser.choose(&options)?;
    let next = options
        .get(index)
        .map(|option| option.version.clone())
        .ok_or_else(|| anyhow::anyhow!("Invalid selection {}", index + 1))?;

    let body = changelog::release_body(&github, &commits, &latest, &next);
    let draft_url = changelog::draft_release_url(&github, &next, &body);

    Ok(WorkflowResult {
        github,
        previous: latest,
        previous_published_at: latest_record.published_at,
        next,
        draft_url,
    })
}

fn detect_github<R: Repository>(repo: &R, remote: &str) -> Result<GitHubRepo> {
    let url = repo
        .remote_url(remote)
        .context("owner/repo not specified and no git remote to detect them from")?;

    match parse_github_remote(&url) {
        Some(github) => Ok(github),
        None => {
            ui::display_boundary_warning(&BoundaryWarning::RemoteNotGitHub {
                remote: remote.to_string(),
                url: url.clone(),
            });
            Err(BumpError::remote(format!("cannot pattern match remote url: {}", url)).into())
        }
    }
}
