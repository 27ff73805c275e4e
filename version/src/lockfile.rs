use crate::error::{Result, VersionError};
use crate::patterns::{declared_value, NAME_DECLARATION_PATTERN, VERSION_DECLARATION_PATTERN};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Prefix shared by every package in the Anemoi family
pub const DEFAULT_PACKAGE_PREFIX: &str = "anemoi-";

/// Package name to locked version
pub type PackageVersions = HashMap<String, String>;

/// A package name waiting for its `version = "..."` line
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingName(String);

#[derive(Debug, Default)]
struct ParserState {
    pending: Option<PendingName>,
}

impl ParserState {
    fn on_name(&mut self, name: &str, prefix: &str) {
        // A new name line always replaces whatever was pending
        self.pending = name
            .starts_with(prefix)
            .then(|| PendingName(name.to_string()));
    }

    fn on_version(&mut self, version: &str, packages: &mut PackageVersions) {
        if let Some(PendingName(name)) = self.pending.take() {
            packages.insert(name, version.to_string());
        }
    }
}

/// Extracts the versions of one package family from a lock file.
///
/// Records are recognised positionally: a `name = "..."` line opens a
/// candidate and the next `version = "..."` line closes it. Declarations
/// must start at column 0, which is how `[[package]]` blocks are written in
/// `poetry.lock`.
#[derive(Debug, Clone)]
pub struct LockFileParser {
    prefix: String,
}

impl Default for LockFileParser {
    fn default() -> Self {
        Self::new(DEFAULT_PACKAGE_PREFIX)
    }
}

impl LockFileParser {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Parses lock file content into a map of matching packages
    #[must_use]
    pub fn parse(&self, content: &str) -> PackageVersions {
        let mut packages = PackageVersions::new();
        let mut state = ParserState::default();

        for line in content.lines() {
            if let Some(name) = declared_value(&NAME_DECLARATION_PATTERN, line) {
                state.on_name(name, &self.prefix);
            } else if let Some(version) = declared_value(&VERSION_DECLARATION_PATTERN, line) {
                state.on_version(version, &mut packages);
            }
        }

        packages
    }

    /// Reads and parses the lock file at `path`
    ///
    /// # Errors
    /// Returns error if the file cannot be read
    pub fn parse_file(&self, path: &Path) -> Result<PackageVersions> {
        let content = fs::read_to_string(path).map_err(|source| VersionError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.parse(&content))
    }
}
