use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use thiserror::Error;

/// Error context to enrich error messages
#[derive(Debug)]
pub struct ErrorContext {
    pub operation: String,
    pub source: Option<String>,
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Operation: {}", self.operation)?;
        if let Some(source) = &self.source {
            write!(f, " (source: {})", source)?;
        }
        Ok(())
    }
}

/// Errors that can occur when working with changelogs
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Failed to read or write changelog file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to write changelog {}: {}", .path.display(), .source)]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("{context}: {source}")]
    ContextualError {
        context: ErrorContext,
        source: Box<ChangelogError>,
    },
}

impl ChangelogError {
    #[must_use]
    pub fn with_operation_context(
        self,
        operation: impl Into<String>,
        source: Option<impl Into<String>>,
    ) -> Self {
        Self::ContextualError {
            context: ErrorContext {
                operation: operation.into(),
                source: source.map(Into::into),
            },
            source: Box::new(self),
        }
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::ReadError(e) => format!("File operation failed: {e}"),
            Self::WriteError { path, source } => {
                format!("Could not write {}: {source}", path.display())
            }
            Self::InvalidDateFormat(fmt) => format!("Invalid date format: {fmt}"),
            Self::ContextualError { context, source } => {
                format!("{}: {}", context, source.user_message())
            }
        }
    }
}
