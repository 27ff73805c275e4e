//! Package-version changelog maintenance.
//!
//! A changelog is a fixed header followed by version sections, newest first.
//! Each section lists the pinned versions of a package family:
//!
//! ```text
//! Version 1.0.0 (2024-05-01)
//! ==========================
//!
//! Anemoi Package Versions
//! ------------------------
//!
//! * **anemoi-core**: ``1.2.0``
//! ```

pub mod config;
pub mod core;
pub mod document;
pub mod error;
pub mod formatter;
pub mod position;
pub mod types;
pub mod utils;
pub mod version;

pub use config::{ChangelogConfig, DEFAULT_HEADER};
pub use crate::core::Changelog;
pub use document::ChangelogDocument;
pub use error::ChangelogError;
pub use formatter::ChangelogFormat;
pub use types::{PackageSection, PackageVersions, Result, UpdateOutcome};

use std::path::Path;

/// Writes a section for `version` into the changelog at `changelog_path`,
/// creating the file if needed. Nothing is written when `packages` is empty.
///
/// # Errors
/// Returns error if the changelog cannot be read or written
pub fn update_changelog(
    changelog_path: &Path,
    version: &str,
    packages: &PackageVersions,
) -> Result<UpdateOutcome> {
    let mut changelog = Changelog::open(
        changelog_path,
        ChangelogConfig::default(),
        ChangelogFormat::Rst,
    )?;
    let outcome = changelog.update_today(version, packages)?;
    if outcome != UpdateOutcome::Skipped {
        changelog.write()?;
    }
    Ok(outcome)
}
