use bump::cli::{run_bump_workflow, Args, BumpWorkflowArgs};
use bump::config::Config;
use bump::git::{CommitInfo, MockRepository};
use bump::remote::GitHubRepo;
use bump::ui::{VersionChooser, VersionOption};
use bump::BumpError;
use clap::Parser;
use semver::Version;
use serial_test::serial;

/// Picks a fixed index and remembers what it was offered
struct ScriptedChooser {
    pick: usize,
    offered: Vec<String>,
}

impl ScriptedChooser {
    fn new(pick: usize) -> Self {
        ScriptedChooser {
            pick,
            offered: Vec::new(),
        }
    }
}

impl VersionChooser for ScriptedChooser {
    fn choose(&mut self, options: &[VersionOption]) -> anyhow::Result<usize> {
        self.offered = options.iter().map(|o| o.label()).collect();
        Ok(self.pick)
    }
}

fn commit(hash: &str, message: &str) -> CommitInfo {
    CommitInfo {
        hash: hash.to_string(),
        message: message.to_string(),
        author: "Test Author".to_string(),
    }
}

fn repo_with_tags(tags: &[&str]) -> MockRepository {
    let mut repo = MockRepository::new();
    repo.set_remote("origin", "git@github.com:mroth/bump.git");
    for (i, tag) in tags.iter().enumerate() {
        repo.add_commit(commit(&format!("{:040}", i), &format!("release {}", tag)));
        repo.add_tag(*tag);
    }
    repo
}

fn default_args() -> BumpWorkflowArgs {
    BumpWorkflowArgs {
        github: None,
        remote: "origin".to_string(),
        include_initial_prereleases: false,
    }
}

#[test]
fn test_workflow_suggests_from_latest_release() {
    let mut repo = repo_with_tags(&["v1.0.0", "v1.2.3", "v1.1.0"]);
    repo.add_commit(commit("ffffffffffffffffffffffffffffffffffffffff", "fix: crash"));
    let mut chooser = ScriptedChooser::new(1);

    let result = run_bump_workflow(&default_args(), &Config::default(), &repo, &mut chooser)
        .expect("workflow should succeed");

    assert_eq!(
        chooser.offered,
        ["patch (1.2.4)", "minor (1.3.0)", "major (2.0.0)"]
    );
    assert_eq!(result.github, GitHubRepo::new("mroth", "bump"));
    assert_eq!(result.previous, Version::parse("1.2.3").unwrap());
    assert_eq!(result.next, Version::parse("1.3.0").unwrap());
    assert!(result
        .draft_url
        .starts_with("https://github.com/mroth/bump/releases/new?tag=v1.3.0&title=v1.3.0&body="));
    assert!(result.draft_url.contains("fix%3A%20crash%20fffffff"));
}

#[test]
fn test_workflow_reports_latest_release_date() {
    let published = chrono::DateTime::from_timestamp(1_136_214_245, 0).unwrap();
    let mut repo = MockRepository::new();
    repo.set_remote("origin", "git@github.com:mroth/bump.git");
    repo.add_commit(commit("aaaaaaa", "initial"));
    repo.add_tag_at("v1.0.0", published);
    repo.add_commit(commit("bbbbbbb", "fix: typo"));

    let result = run_bump_workflow(
        &default_args(),
        &Config::default(),
        &repo,
        &mut ScriptedChooser::new(0),
    )
    .unwrap();

    assert_eq!(result.previous_published_at, Some(published));
    assert_eq!(
        bump::ui::format_published(published),
        "2006 Jan 2"
    );
}

#[test]
fn test_workflow_without_tag_dates() {
    let repo = repo_with_tags(&["v1.0.0"]);

    let result = run_bump_workflow(
        &default_args(),
        &Config::default(),
        &repo,
        &mut ScriptedChooser::new(0),
    )
    .unwrap();

    assert_eq!(result.previous_published_at, None);
}

#[test]
fn test_workflow_continues_prerelease_train() {
    let repo = repo_with_tags(&["v2.3.2", "v2.3.3-rc.1", "nightly"]);
    let mut chooser = ScriptedChooser::new(0);

    let result = run_bump_workflow(&default_args(), &Config::default(), &repo, &mut chooser)
        .expect("workflow should succeed");

    assert_eq!(
        chooser.offered,
        ["prepatch (2.3.3-rc.2)", "patch (2.3.3)"]
    );
    assert_eq!(result.next, Version::parse("2.3.3-rc.2").unwrap());
}

#[test]
fn test_workflow_offers_initial_prereleases() {
    let repo = repo_with_tags(&["v0.4.1"]);
    let mut chooser = ScriptedChooser::new(4);
    let args = BumpWorkflowArgs {
        include_initial_prereleases: true,
        ..default_args()
    };

    let result = run_bump_workflow(&args, &Config::default(), &repo, &mut chooser).unwrap();

    assert_eq!(chooser.offered.len(), 6);
    assert_eq!(chooser.offered[3], "prepatch (0.4.2-rc.1)");
    assert_eq!(result.next, Version::parse("0.5.0-rc.1").unwrap());
}

#[test]
fn test_workflow_explicit_repo_skips_remote_detection() {
    let mut repo = MockRepository::new();
    repo.add_commit(commit("aaaaaaa", "initial"));
    repo.add_tag("1.0.0");
    let args = BumpWorkflowArgs {
        github: Some(GitHubRepo::new("someone", "else")),
        ..default_args()
    };

    let result =
        run_bump_workflow(&args, &Config::default(), &repo, &mut ScriptedChooser::new(2)).unwrap();

    assert_eq!(result.github.to_string(), "someone/else");
    assert_eq!(result.next, Version::parse("2.0.0").unwrap());
}

#[test]
fn test_workflow_without_releases_fails() {
    let repo = repo_with_tags(&["nightly", "latest"]);

    let err = run_bump_workflow(
        &default_args(),
        &Config::default(),
        &repo,
        &mut ScriptedChooser::new(0),
    )
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<BumpError>(),
        Some(BumpError::EmptyReleaseSet)
    ));
}

#[test]
fn test_workflow_non_github_remote_fails() {
    let mut repo = repo_with_tags(&["v1.0.0"]);
    repo.set_remote("origin", "https://gitlab.com/mroth/bump.git");

    let result = run_bump_workflow(
        &default_args(),
        &Config::default(),
        &repo,
        &mut ScriptedChooser::new(0),
    );

    assert!(result.is_err());
}

#[test]
fn test_workflow_rejects_out_of_range_choice() {
    let repo = repo_with_tags(&["v1.0.0"]);

    let result = run_bump_workflow(
        &default_args(),
        &Config::default(),
        &repo,
        &mut ScriptedChooser::new(7),
    );

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_workflow_args_from_cli_merges_config() {
    let mut config = Config::default();
    config.remote = "upstream".to_string();
    config.behavior.include_initial_prereleases = true;
    let args = Args::try_parse_from(["bump", "mroth", "bump"]).unwrap();

    let workflow_args = BumpWorkflowArgs::from_cli(&args, &config);

    assert_eq!(workflow_args.github, Some(GitHubRepo::new("mroth", "bump")));
    assert_eq!(workflow_args.remote, "upstream");
    assert!(workflow_args.include_initial_prereleases);
}

#[test]
#[serial]
fn test_workflow_args_cli_remote_wins() {
    let args = Args::try_parse_from(["bump", "--remote", "fork"]).unwrap();

    let workflow_args = BumpWorkflowArgs::from_cli(&args, &Config::default());

    assert_eq!(workflow_args.github, None);
    assert_eq!(workflow_args.remote, "fork");
    assert!(!workflow_args.include_initial_prereleases);
}

#[test]
#[serial]
fn test_no_open_from_environment() {
    std::env::set_var(bump::cli::args::ENV_NO_OPEN, "true");
    let args = Args::try_parse_from(["bump"]);
    std::env::remove_var(bump::cli::args::ENV_NO_OPEN);

    assert!(args.unwrap().no_open);
}

#[test]
#[serial]
fn test_no_open_defaults_off() {
    std::env::remove_var(bump::cli::args::ENV_NO_OPEN);
    let args = Args::try_parse_from(["bump"]).unwrap();

    assert!(!args.no_open);
}

#[test]
#[serial]
fn test_env_flags_accept_common_truthy_values() {
    for value in ["1", "yes", "TRUE"] {
        std::env::set_var(bump::cli::args::ENV_NO_OPEN, value);
        std::env::set_var(bump::cli::args::ENV_VERBOSE, value);
        let args = Args::try_parse_from(["bump"]);
        std::env::remove_var(bump::cli::args::ENV_NO_OPEN);
        std::env::remove_var(bump::cli::args::ENV_VERBOSE);

        let args = args.unwrap_or_else(|e| panic!("{} should parse: {}", value, e));
        assert!(args.no_open, "{}", value);
        assert!(args.verbose, "{}", value);
    }
}

#[test]
#[serial]
fn test_env_flags_unrecognised_value_is_false() {
    std::env::set_var(bump::cli::args::ENV_VERBOSE, "garbage");
    let args = Args::try_parse_from(["bump"]);
    std::env::remove_var(bump::cli::args::ENV_VERBOSE);

    assert!(!args.unwrap().verbose);
}

#[test]
#[serial]
fn test_cli_flag_overrides_falsey_env() {
    std::env::set_var(bump::cli::args::ENV_NO_OPEN, "0");
    let args = Args::try_parse_from(["bump", "--no-open"]);
    std::env::remove_var(bump::cli::args::ENV_NO_OPEN);

    assert!(args.unwrap().no_open);
}
