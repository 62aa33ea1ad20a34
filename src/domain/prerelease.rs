//! Pre-release counter handling for semantic versioning
//!
//! A pre-release train such as `rc.1`, `rc.2`, ... is recognised by a trailing
//! run of decimal digits. Everything before that run is kept verbatim as the
//! prefix, and the digit run is the counter. The width of the digit run is
//! remembered so zero-padded counters stay padded (`dev01` -> `dev02`).
//! According to semver.org: https://semver.org/#spec-item-9

use crate::error::{BumpError, Result};
use std::fmt;
use std::str::FromStr;

/// A pre-release string split into prefix and trailing numeric counter
///
/// # Examples
/// - "rc.1" -> PrereleaseCounter { prefix: "rc.", counter: 1, width: 1 }
/// - "dev01" -> PrereleaseCounter { prefix: "dev", counter: 1, width: 2 }
/// - "rc32" -> PrereleaseCounter { prefix: "rc", counter: 32, width: 2 }
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrereleaseCounter {
    /// Everything before the trailing digit run
    pub prefix: String,
    /// Numeric value of the trailing digit run
    pub counter: u64,
    /// Character length of the original digit run
    pub width: usize,
}

impl PrereleaseCounter {
    /// Create a counter with an explicit prefix, starting value and width
    pub fn new(prefix: impl Into<String>, counter: u64, width: usize) -> Self {
        PrereleaseCounter {
            prefix: prefix.into(),
            counter,
            width,
        }
    }

    /// Parse a pre-release string into prefix and counter
    ///
    /// The trailing digit run is matched greedily and must reach the end of
    /// the string.
    ///
    /// # Arguments
    /// * `pre` - Pre-release string (e.g., "rc.1", "beta3", "dev.01")
    ///
    /// # Returns
    /// * `Ok(PrereleaseCounter)` - Decomposed pre-release
    /// * `Err(InvalidPrereleaseFormat)` - If `pre` is empty, has no trailing
    ///   digits, or the counter does not fit in a `u64`
    pub fn parse(pre: &str) -> Result<Self> {
        let digits = pre
            .bytes()
            .rev()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits == 0 {
            return Err(BumpError::invalid_prerelease(pre));
        }

        // The digit run is pure ASCII, so this is always a char boundary.
        let (prefix, run) = pre.split_at(pre.len() - digits);
        let counter = run
            .parse::<u64>()
            .map_err(|_| BumpError::invalid_prerelease(pre))?;

        Ok(PrereleaseCounter {
            prefix: prefix.to_string(),
            counter,
            width: digits,
        })
    }

    /// Advance the counter by one, keeping prefix and padding width
    ///
    /// The width grows naturally once the new value needs more digits
    /// (`dev99` -> `dev100`).
    pub fn next(&self) -> Result<Self> {
        let counter = self
            .counter
            .checked_add(1)
            .ok_or_else(|| BumpError::invalid_prerelease(self.to_string()))?;

        Ok(PrereleaseCounter {
            prefix: self.prefix.clone(),
            counter,
            width: self.width,
        })
    }
}

impl FromStr for PrereleaseCounter {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        PrereleaseCounter::parse(s)
    }
}

impl fmt::Display for PrereleaseCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:0width$}",
            self.prefix,
            self.counter,
            width = self.width
        )
    }
}

/// Increment the numeric suffix of a pre-release string.
///
/// Leading zeros of the original suffix are preserved.
///
/// # Example
/// ```
/// use bump::domain::prerelease::increment;
/// assert_eq!(increment("dev01").unwrap(), "dev02");
/// assert_eq!(increment("rc.9").unwrap(), "rc.10");
/// assert!(increment("foobar").is_err());
/// ```
pub fn increment(pre: &str) -> Result<String> {
    let parsed = PrereleaseCounter::parse(pre)?;
    Ok(parsed.next()?.to_string())
}

/// Whether a pre-release string belongs to a train that can be continued.
///
/// True exactly when [`increment`] succeeds: the string has a trailing
/// counter and that counter can still be advanced.
pub fn is_continuable(pre: &str) -> bool {
    increment(pre).is_ok()
}
