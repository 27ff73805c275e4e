//! Shared fixtures for the integration tests.

use std::fs;
use std::path::Path;

pub const POETRY_LOCK: &str = r#"# This file is automatically @generated by Poetry and should not be changed by hand.

[[package]]
name = "anemoi-datasets"
version = "0.5.3"
description = "A package to hold various functions to support training of ML models on ECMWF data."
optional = false
python-versions = ">=3.9"

[package.dependencies]
anemoi-utils = ">=0.4.0"
numpy = "*"

[[package]]
name = "anemoi-utils"
version = "0.4.12"
description = "A package to hold various functions to support training of ML models on ECMWF data."
optional = false
python-versions = ">=3.9"

[[package]]
name = "numpy"
version = "1.26.4"
description = "Fundamental package for array computing in Python"
optional = false
python-versions = ">=3.9"

[[package]]
name = "anemoi-graphs"
version = "0.2.1"
description = "A package to build graphs for data-driven NWPs."
optional = false
python-versions = ">=3.9"

[extras]
docs = ["sphinx"]
"#;

pub fn pyproject(version: &str) -> String {
    format!(
        "[tool.poetry]\n\
         name = \"anemoi-release\"\n\
         version = \"{version}\"\n\
         description = \"Pinned Anemoi stack\"\n\n\
         [tool.poetry.dependencies]\n\
         python = \">=3.9\"\n"
    )
}

pub fn write_project(dir: &Path, version: &str, lock: &str) -> std::io::Result<()> {
    fs::write(dir.join("pyproject.toml"), pyproject(version))?;
    fs::write(dir.join("poetry.lock"), lock)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_lock_has_three_anemoi_packages() {
        let packages = version::LockFileParser::default().parse(POETRY_LOCK);
        assert_eq!(packages.len(), 3);
    }

    #[test]
    fn fixture_manifest_version() {
        assert_eq!(version::current_version(&pyproject("2.1.0")), "2.1.0");
    }
}
