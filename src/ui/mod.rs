//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, BufRead, Write};

use anyhow::Result;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_changelog, display_draft_url, display_error,
    display_latest_release, display_success, display_version_options, format_published,
    version_options, VersionOption,
};

/// Something that picks one of the candidate next versions.
///
/// Implemented by [`TerminalChooser`] for interactive use; tests supply their own.
pub trait VersionChooser {
    /// Return the index of the chosen option
    fn choose(&mut self, options: &[VersionOption]) -> Result<usize>;
}

/// Prompts on stdin/stdout for the next version
#[derive(Debug, Default)]
pub struct TerminalChooser;

impl VersionChooser for TerminalChooser {
    fn choose(&mut self, options: &[VersionOption]) -> Result<usize> {
        display_version_options(options);

        print!("\nSelect a version (1-{}) [default: 1]: ", options.len());
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        parse_selection(&input, options.len())
    }
}

/// Interprets a 1-based selection typed by the user.
///
/// Empty input selects the first option.
///
/// # Arguments
/// * `input` - Raw line typed by the user
/// * `count` - Number of options displayed
///
/// # Returns
/// * `Ok(usize)` - 0-based index of the selected option
/// * `Err` - If the input is not a number in range
pub fn parse_selection(input: &str, count: usize) -> Result<usize> {
    let selection = input.trim();

    let index = if selection.is_empty() {
        1
    } else {
        selection.parse::<usize>().unwrap_or(0)
    };

    if index > 0 && index <= count {
        Ok(index - 1)
    } else {
        Err(anyhow::anyhow!("Invalid selection '{}'", selection))
    }
}
