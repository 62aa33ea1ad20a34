use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use bump::cli::{run_bump_workflow, Args, BumpWorkflowArgs};
use bump::config;
use bump::git::Git2Repository;
use bump::ui::{self, TerminalChooser};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    debug!("parsed arguments: {:?}", args);

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };
    debug!("loaded configuration: {:?}", config);

    // Initialize git repository
    let repo = match Git2Repository::open(&args.path) {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let workflow_args = BumpWorkflowArgs::from_cli(&args, &config);
    let result = match run_bump_workflow(&workflow_args, &config, &repo, &mut TerminalChooser) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    if args.no_open || config.behavior.no_open {
        ui::display_draft_url(&result.draft_url);
        return Ok(());
    }

    ui::display_success("Drafting new release on GitHub!");
    debug!("opening browser to: {}", result.draft_url);
    if let Err(e) = open::that(&result.draft_url) {
        ui::display_error(&format!("Could not open browser: {}", e));
        ui::display_draft_url(&result.draft_url);
    }

    Ok(())
}

/// Filter used when `RUST_LOG` is not set
fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "bump=debug"
    } else {
        "bump=warn"
    }
}

/// Log to stderr; `--verbose` enables debug output unless `RUST_LOG` says otherwise.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
