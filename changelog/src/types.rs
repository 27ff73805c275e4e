use crate::error::ChangelogError;
use std::collections::HashMap;

/// Type alias for Result with `ChangelogError`
pub type Result<T> = std::result::Result<T, ChangelogError>;

/// Package name to version, as collected from a lock file
pub type PackageVersions = HashMap<String, String>;

/// A version section ready to be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSection {
    pub version: String,
    pub date: String,
    /// Sorted by package name
    pub packages: Vec<(String, String)>,
}

impl PackageSection {
    pub fn new(
        version: impl Into<String>,
        date: impl Into<String>,
        packages: &PackageVersions,
    ) -> Self {
        let mut packages: Vec<(String, String)> = packages
            .iter()
            .map(|(name, version)| (name.clone(), version.clone()))
            .collect();
        packages.sort_by(|a, b| a.0.cmp(&b.0));

        Self {
            version: version.into(),
            date: date.into(),
            packages,
        }
    }
}

/// What an update did to the changelog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Nothing to record, the document was left untouched
    Skipped,
    /// A section for a version not seen before was inserted
    Created,
    /// An existing section for the same version was replaced
    Replaced,
}
