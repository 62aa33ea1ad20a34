//! Next-version suggestions

use semver::Version;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::prerelease::{increment, is_continuable};
use super::version::{finalize, with_prerelease, VersionBump};
use crate::error::{BumpError, Result};

/// Returns the default prefix for a brand-new pre-release train.
fn default_initial_prefix() -> String {
    "rc.".to_string()
}

/// Returns the default first counter value of a brand-new pre-release train.
fn default_initial_counter() -> u64 {
    1
}

/// Settings for seeding a new pre-release train.
///
/// The initial token is `initial_prefix` followed by `initial_counter`,
/// `rc.1` by default.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PrereleaseConfig {
    #[serde(default = "default_initial_prefix")]
    pub initial_prefix: String,

    #[serde(default = "default_initial_counter")]
    pub initial_counter: u64,
}

impl Default for PrereleaseConfig {
    fn default() -> Self {
        PrereleaseConfig {
            initial_prefix: default_initial_prefix(),
            initial_counter: default_initial_counter(),
        }
    }
}

impl PrereleaseConfig {
    /// The pre-release string a new train starts with
    pub fn initial_token(&self) -> String {
        format!("{}{}", self.initial_prefix, self.initial_counter)
    }

    /// Check that the initial token is a valid semver pre-release.
    pub fn validate(&self) -> Result<()> {
        let token = self.initial_token();
        semver::Prerelease::new(&token).map_err(|e| {
            BumpError::config(format!(
                "initial pre-release '{}' is not valid semver: {}",
                token, e
            ))
        })?;
        Ok(())
    }
}

/// Computes candidate next versions for a current version
#[derive(Debug, Clone, Default)]
pub struct NextVersionSuggester {
    config: PrereleaseConfig,
}

impl NextVersionSuggester {
    /// Create a suggester seeding new pre-release trains from `config`
    pub fn new(config: PrereleaseConfig) -> Self {
        NextVersionSuggester { config }
    }

    /// Suggest the versions that could follow `current`, in display order.
    ///
    /// If `current` is part of a continuable pre-release train (e.g.
    /// `1.3.0-rc.2`), the result is the next pre-release and the final
    /// release: `[1.3.0-rc.3, 1.3.0]`. The flag is ignored in that case.
    ///
    /// Otherwise the result is the patch, minor and major bumps, followed,
    /// when `include_initial_prereleases` is set, by the same three bumps
    /// carrying the initial pre-release token.
    ///
    /// # Returns
    /// * `Ok(Vec<Version>)` - 2, 3 or 6 candidates
    /// * `Err` - If the configured initial token is not a valid pre-release
    ///
    /// # Example
    /// ```
    /// use bump::domain::NextVersionSuggester;
    /// use semver::Version;
    ///
    /// let suggester = NextVersionSuggester::default();
    /// let next = suggester.suggest(&Version::parse("1.2.3").unwrap(), false).unwrap();
    /// let next: Vec<String> = next.iter().map(|v| v.to_string()).collect();
    /// assert_eq!(next, ["1.2.4", "1.3.0", "2.0.0"]);
    /// ```
    pub fn suggest(
        &self,
        current: &Version,
        include_initial_prereleases: bool,
    ) -> Result<Vec<Version>> {
        let pre = current.pre.as_str();
        if is_continuable(pre) {
            let next_pre = with_prerelease(current, &increment(pre)?)?;
            return Ok(vec![next_pre, finalize(current)]);
        }

        if !current.pre.is_empty() {
            debug!(
                "pre-release '{}' of {} has no counter, suggesting fresh releases",
                current.pre, current
            );
        }

        let finals: Vec<Version> = VersionBump::ALL
            .iter()
            .map(|bump| bump.apply(current))
            .collect();

        let mut candidates = finals.clone();
        if include_initial_prereleases {
            let token = self.config.initial_token();
            for version in &finals {
                candidates.push(with_prerelease(version, &token)?);
            }
        }
        Ok(candidates)
    }
}
