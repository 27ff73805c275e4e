use std::path::PathBuf;
use std::result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Failed to read {}: {}", .path.display(), .source)]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl VersionError {
    /// Get a user-friendly message for command line display
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            VersionError::ReadFile { path, source }
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                format!("File not found: {}", path.display())
            }
            _ => format!("{}", self),
        }
    }
}

pub type Result<T> = result::Result<T, VersionError>;
