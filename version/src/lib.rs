//! Version extraction from Python project files: the locked versions of a
//! package family from `poetry.lock` and the project's own version from
//! `pyproject.toml`.

mod error;
mod lockfile;
mod manifest;
mod patterns;

pub use error::{Result, VersionError};
pub use lockfile::{LockFileParser, PackageVersions, DEFAULT_PACKAGE_PREFIX};
pub use manifest::{current_version, read_current_version, UNKNOWN_VERSION};
