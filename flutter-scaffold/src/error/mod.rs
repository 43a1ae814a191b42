//! Error types and error handling

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;

/// Scaffold error type
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// No usable project root was supplied
    ///
    /// Fatal for the whole run; nothing is written.
    #[error("No project root: {0}")]
    NoRoot(String),

    /// A catalog entry has a path that would escape or ignore the root
    #[error("Invalid catalog path '{}': {reason}", path.display())]
    InvalidCatalogPath {
        /// Offending relative path
        path: PathBuf,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Creating a directory or writing a file failed
    #[error("Filesystem error at {}: {source}", path.display())]
    Filesystem {
        /// Absolute path of the failed action
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The manifest exists but could not be read
    #[error("Failed to read manifest {}: {source}", path.display())]
    ManifestRead {
        /// Manifest path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The manifest could not be overwritten
    #[error("Failed to write manifest {}: {source}", path.display())]
    ManifestWrite {
        /// Manifest path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ScaffoldError {
    /// Wrap an I/O error raised while acting on `path`
    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}

impl From<figment::Error> for ScaffoldError {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path() {
        let err = ScaffoldError::filesystem(
            "/tmp/app/lib/main.dart",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let message = err.to_string();
        assert!(message.contains("/tmp/app/lib/main.dart"));
        assert!(message.contains("denied"));
    }
}
