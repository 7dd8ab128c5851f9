use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for the release tools
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Malformed checksum listing '{}' at line {line}: expected '<checksum>  <filename>', got '{content}'", path.display())]
    MalformedChecksum {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error("Failed to read checksum listing '{}': {source}", path.display())]
    ChecksumFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config file error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Results in the release tools
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseError::Version(msg.into())
    }

    /// True for errors caused by user input (flags, environment, config file).
    ///
    /// The binaries answer these with a diagnostic plus usage text and exit code 1.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            ReleaseError::Config(_) | ReleaseError::Version(_) | ReleaseError::Toml(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReleaseError::config("missing basedir");
        assert_eq!(err.to_string(), "Configuration error: missing basedir");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReleaseError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
        assert!(!err.is_user_input());
    }

    #[test]
    fn test_malformed_checksum_message() {
        let err = ReleaseError::MalformedChecksum {
            path: PathBuf::from("/srv/SHA512-SUMS.txt"),
            line: 3,
            content: "abc123 engine.zip".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/srv/SHA512-SUMS.txt"));
        assert!(msg.contains("line 3"));
        assert!(msg.contains("abc123 engine.zip"));
    }

    #[test]
    fn test_checksum_file_keeps_source() {
        use std::error::Error as _;

        let err = ReleaseError::ChecksumFile {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
        };
        assert!(err.to_string().contains("missing.txt"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_user_input_classification() {
        assert!(ReleaseError::config("x").is_user_input());
        assert!(ReleaseError::version("x").is_user_input());
        assert!(!ReleaseError::MalformedChecksum {
            path: PathBuf::new(),
            line: 1,
            content: String::new(),
        }
        .is_user_input());
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ReleaseError::config("x"), "Configuration error"),
            (ReleaseError::version("x"), "Version parsing error"),
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
