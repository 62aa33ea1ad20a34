use thiserror::Error;

/// Unified error type for bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Invalid pre-release format: '{0}' has no trailing numeric counter")]
    InvalidPrereleaseFormat(String),

    #[error("No parsable releases found")]
    EmptyReleaseSet,

    #[error("Version error: {0}")]
    Version(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Remote error: {0}")]
    Remote(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create an invalid pre-release error for the offending string
    pub fn invalid_prerelease(pre: impl Into<String>) -> Self {
        BumpError::InvalidPrereleaseFormat(pre.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        BumpError::Version(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        BumpError::Remote(msg.into())
    }
}

impl From<semver::Error> for BumpError {
    fn from(err: semver::Error) -> Self {
        BumpError::Version(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BumpError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_invalid_prerelease_names_input() {
        let err = BumpError::invalid_prerelease("foobar");
        assert_eq!(
            err.to_string(),
            "Invalid pre-release format: 'foobar' has no trailing numeric counter"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BumpError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_semver() {
        let semver_err = semver::Version::parse("not-a-version").unwrap_err();
        let err: BumpError = semver_err.into();
        assert!(err.to_string().starts_with("Version error"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (BumpError::config("x"), "Configuration error"),
            (BumpError::version("x"), "Version error"),
            (BumpError::remote("x"), "Remote error"),
            (BumpError::EmptyReleaseSet, "No parsable releases"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
