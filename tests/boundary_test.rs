use bump::boundary::BoundaryWarning;
use bump::ui;

// ============================================================================
// BoundaryWarning Display Tests
// ============================================================================

#[test]
fn test_boundary_warning_no_releases_display() {
    let warning = BoundaryWarning::NoReleases { tag_count: 4 };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("No semantic version releases"),
        "Message should mention missing releases, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("4 tag(s)"),
        "Message should contain the tag count, got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_no_new_commits_display() {
    let warning = BoundaryWarning::NoNewCommits {
        latest_tag: "v1.0.0".to_string(),
        current_commit_hash: "abc1234def5678".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("No new commits"),
        "Message should contain 'No new commits', got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("v1.0.0"),
        "Message should contain tag 'v1.0.0', got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("abc1234") && !display_msg.contains("abc1234d"),
        "Message should contain shortened commit hash 'abc1234', got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_no_new_commits_short_hash() {
    let warning = BoundaryWarning::NoNewCommits {
        latest_tag: "v1.0.0".to_string(),
        current_commit_hash: "abc".to_string(),
    };

    assert!(warning.to_string().contains("(current: abc)"));
}

#[test]
fn test_boundary_warning_remote_not_github_display() {
    let warning = BoundaryWarning::RemoteNotGitHub {
        remote: "origin".to_string(),
        url: "https://gitlab.com/a/b.git".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("origin"),
        "Message should contain remote name 'origin', got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("gitlab.com"),
        "Message should contain the URL, got: {}",
        display_msg
    );
}

#[test]
fn test_display_boundary_warning_does_not_panic() {
    // Visual verification test - output is printed to stderr
    ui::display_boundary_warning(&BoundaryWarning::NoReleases { tag_count: 0 });
}
