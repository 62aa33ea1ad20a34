use clap::Parser;
use std::convert::Infallible;

/// Environment variable providing the default for `--no-open`
pub const ENV_NO_OPEN: &str = "BUMP_NO_OPEN";

/// Environment variable providing the default for `--verbose`
pub const ENV_VERBOSE: &str = "BUMP_VERBOSE";

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "bump",
    version,
    about = "Suggest the next semantic version and draft a GitHub release",
    after_help = "If you are in a git repository cloned from GitHub, OWNER and REPO can be \
                  omitted; they are inferred from the remote."
)]
pub struct Args {
    #[arg(help = "GitHub repository owner")]
    pub owner: Option<String>,

    #[arg(help = "GitHub repository name")]
    pub repo: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    pub config: Option<String>,

    #[arg(long, default_value = ".", help = "Path inside the git repository")]
    pub path: String,

    #[arg(long, help = "Git remote used to detect the GitHub repository")]
    pub remote: Option<String>,

    #[arg(long, help = "Also offer versions starting a new pre-release train")]
    pub prerelease: bool,

    #[arg(
        long,
        env = ENV_NO_OPEN,
        value_parser = parse_env_flag,
        help = "Do not automatically open the draft URL in a browser"
    )]
    pub no_open: bool,

    #[arg(
        short,
        long,
        env = ENV_VERBOSE,
        value_parser = parse_env_flag,
        help = "Verbose output"
    )]
    pub verbose: bool,
}

/// Reads a boolean flag value: `true`, `yes` or `1` in any case, anything else is false.
pub fn parse_env_flag(value: &str) -> Result<bool, Infallible> {
    Ok(matches!(
        value.to_ascii_lowercase().as_str(),
        "true" | "yes" | "1"
    ))
}
