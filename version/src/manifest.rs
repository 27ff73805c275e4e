use crate::error::{Result, VersionError};
use crate::patterns::{declared_value, VERSION_DECLARATION_PATTERN};
use std::fs;
use std::path::Path;

/// Returned when the manifest has no `version = "..."` line
pub const UNKNOWN_VERSION: &str = "unknown";

/// First declared version in manifest content, or [`UNKNOWN_VERSION`].
#[must_use]
pub fn current_version(content: &str) -> String {
    content
        .lines()
        .find_map(|line| declared_value(&VERSION_DECLARATION_PATTERN, line))
        .unwrap_or(UNKNOWN_VERSION)
        .to_string()
}

/// Reads the project version from the manifest at `path`
///
/// # Errors
/// Returns error if the file cannot be read. A readable file without a
/// version line is not an error.
pub fn read_current_version(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|source| VersionError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(current_version(&content))
}
