//! Error types shared across the compiler

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading content or assembling the output tree
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to copy {from:?} to {to:?}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed manifest {path:?}: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("post #{index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("post {file}: unparseable date `{value}`")]
    InvalidDate { file: String, value: String },
}

impl BuildError {
    /// Whether this error came from the filesystem rather than input parsing
    pub fn is_filesystem(&self) -> bool {
        matches!(
            self,
            BuildError::Read { .. }
                | BuildError::Write { .. }
                | BuildError::Copy { .. }
                | BuildError::CreateDir { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BuildError::MissingField {
            index: 2,
            field: "date",
        };
        assert_eq!(err.to_string(), "post #2 is missing required field `date`");

        let err = BuildError::InvalidDate {
            file: "blog/a.md".to_string(),
            value: "not-a-date".to_string(),
        };
        assert!(err.to_string().contains("not-a-date"));
    }

    #[test]
    fn test_error_taxonomy() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = BuildError::Read {
            path: PathBuf::from("missing.md"),
            source: io,
        };
        assert!(err.is_filesystem());
        assert!(!BuildError::MissingField {
            index: 0,
            field: "file"
        }
        .is_filesystem());
    }
}
