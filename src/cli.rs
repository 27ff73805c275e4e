use changelog::ChangelogFormat;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub const DEFAULT_LOCK_FILE: &str = "poetry.lock";
pub const DEFAULT_MANIFEST_FILE: &str = "pyproject.toml";
pub const DEFAULT_CHANGELOG_FILE: &str = "CHANGELOG.rst";

#[derive(Parser, Debug)]
#[command(name = "update-changelog")]
#[command(
    author,
    version,
    about = "Record the locked Anemoi package versions in the changelog"
)]
pub struct Cli {
    /// Lock file to read package versions from
    #[clap(long, default_value = DEFAULT_LOCK_FILE)]
    pub lock_file: PathBuf,

    /// Project manifest holding the release version
    #[clap(long, default_value = DEFAULT_MANIFEST_FILE)]
    pub manifest: PathBuf,

    /// Changelog to update (created if missing)
    #[clap(long, default_value = DEFAULT_CHANGELOG_FILE)]
    pub changelog: PathBuf,

    /// Only packages whose name starts with this prefix are recorded
    #[clap(long, default_value = version::DEFAULT_PACKAGE_PREFIX)]
    pub prefix: String,

    /// Markup used for the new section
    #[clap(long, value_enum, default_value_t = SectionFormat::Rst)]
    pub format: SectionFormat,

    /// Enable verbose output with additional information
    #[clap(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SectionFormat {
    Rst,
    Markdown,
}

impl From<SectionFormat> for ChangelogFormat {
    fn from(format: SectionFormat) -> Self {
        match format {
            SectionFormat::Rst => ChangelogFormat::Rst,
            SectionFormat::Markdown => ChangelogFormat::Markdown,
        }
    }
}
