use crate::config::ChangelogConfig;
use crate::document::ChangelogDocument;
use crate::error::ChangelogError;
use crate::formatter::{create_section_formatter, ChangelogFormat};
use crate::types::*;
use crate::version::{DefaultVersionUpdater, VersionUpdater};
use chrono::{Local, NaiveDate};
use std::fmt::Write as _;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Represents a changelog file and its in-memory document
pub struct Changelog {
    path: PathBuf,
    document: ChangelogDocument,
    existed: bool,
    config: ChangelogConfig,
    format: ChangelogFormat,
}

impl Changelog {
    /// Loads the changelog at `path`, or starts from the default header if
    /// the file does not exist yet
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read
    pub fn open(
        path: impl Into<PathBuf>,
        config: ChangelogConfig,
        format: ChangelogFormat,
    ) -> Result<Self> {
        let path = path.into();

        let (document, existed) = match fs::read_to_string(&path) {
            Ok(content) => (ChangelogDocument::parse(&content, config.header_lines), true),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                (ChangelogDocument::with_header(&config.default_header), false)
            }
            Err(e) => {
                return Err(ChangelogError::ReadError(e).with_operation_context(
                    "Reading changelog",
                    Some(path.display().to_string()),
                ));
            }
        };

        Ok(Self {
            path,
            document,
            existed,
            config,
            format,
        })
    }

    /// Replaces or inserts the section for `version` listing `packages`
    ///
    /// An empty package map is a no-op and reports [`UpdateOutcome::Skipped`].
    ///
    /// # Errors
    /// Returns error if the configured date format is invalid
    pub fn update(
        &mut self,
        version: &str,
        packages: &PackageVersions,
        date: NaiveDate,
    ) -> Result<UpdateOutcome> {
        let date = self.format_date(date)?;
        let section = PackageSection::new(version, date, packages);

        let formatter = create_section_formatter(self.format, &self.config);
        let updater = DefaultVersionUpdater::new(formatter.as_ref());
        let outcome = updater.update_with_version(&mut self.document, &section);

        if self.config.verbose && outcome != UpdateOutcome::Skipped {
            println!(
                "Changelog now has {} version sections",
                self.document.markers().len()
            );
        }

        Ok(outcome)
    }

    /// Same as [`Changelog::update`], dated with the local date
    ///
    /// # Errors
    /// Returns error if the configured date format is invalid
    pub fn update_today(
        &mut self,
        version: &str,
        packages: &PackageVersions,
    ) -> Result<UpdateOutcome> {
        self.update(version, packages, Local::now().date_naive())
    }

    /// Writes the document back to disk, replacing the file
    ///
    /// # Errors
    /// Returns error if the file cannot be written
    pub fn write(&mut self) -> Result<()> {
        fs::write(&self.path, self.document.render()).map_err(|source| {
            ChangelogError::WriteError {
                path: self.path.clone(),
                source,
            }
        })?;
        self.existed = true;
        Ok(())
    }

    fn format_date(&self, date: NaiveDate) -> Result<String> {
        let mut formatted = String::new();
        write!(formatted, "{}", date.format(&self.config.date_format))
            .map_err(|_| ChangelogError::InvalidDateFormat(self.config.date_format.clone()))?;
        Ok(formatted)
    }

    /// Whether a section for `version` is already present
    #[must_use]
    pub fn has_version(&self, version: &str) -> bool {
        self.document.has_section(version)
    }

    /// Gets the path to the changelog file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file was on disk when opened (or has been written since)
    #[must_use]
    pub const fn existed(&self) -> bool {
        self.existed
    }

    #[must_use]
    pub const fn document(&self) -> &ChangelogDocument {
        &self.document
    }

    /// The document as it would be written
    #[must_use]
    pub fn content(&self) -> String {
        self.document.render()
    }

    /// Gets the format of the changelog
    #[must_use]
    pub const fn format(&self) -> ChangelogFormat {
        self.format
    }

    /// Gets a reference to the changelog's configuration
    #[must_use]
    pub const fn config(&self) -> &ChangelogConfig {
        &self.config
    }
}
