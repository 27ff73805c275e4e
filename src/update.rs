use crate::cli::Cli;
use crate::error::{Result, ResultExt};
use crate::ui;
use changelog::{Changelog, ChangelogConfig, UpdateOutcome};
use version::{LockFileParser, PackageVersions, UNKNOWN_VERSION};

/// Records the locked package versions under the project's current version
pub fn execute(cli: &Cli) -> Result<UpdateOutcome> {
    let current_version = version::read_current_version(&cli.manifest)
        .with_context(|| "Failed to read project version")?;

    let parser = LockFileParser::new(cli.prefix.as_str());
    let packages = parser
        .parse_file(&cli.lock_file)
        .with_context(|| "Failed to read package versions")?;

    if cli.verbose {
        println!("Project version: {current_version}");
        print_packages(&packages);
    }

    if packages.is_empty() {
        ui::warning_message(&format!(
            "No packages matching '{}*' found in {}",
            parser.prefix(),
            cli.lock_file.display()
        ));
        return Ok(UpdateOutcome::Skipped);
    }

    if current_version == UNKNOWN_VERSION {
        ui::warning_message(&format!(
            "No version found in {}, recording as '{UNKNOWN_VERSION}'",
            cli.manifest.display()
        ));
    }

    let config = ChangelogConfig {
        verbose: cli.verbose,
        ..ChangelogConfig::default()
    };
    let mut changelog = Changelog::open(&cli.changelog, config, cli.format.into())
        .with_context(|| "Failed to open changelog")?;

    if changelog.has_version(&current_version) {
        ui::warning_message(&format!(
            "Version {current_version} already exists in changelog. Updating..."
        ));
    }

    let outcome = changelog.update_today(&current_version, &packages)?;
    changelog.write()?;

    ui::success_message(&format!(
        "Updated {} with version {current_version}",
        cli.changelog.display()
    ));
    ui::info_message(&format!("Found {} packages", packages.len()));

    Ok(outcome)
}

fn print_packages(packages: &PackageVersions) {
    let mut names: Vec<&String> = packages.keys().collect();
    names.sort();
    for name in names {
        ui::detail_message(&format!("{name} = {}", packages[name]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SectionFormat;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const LOCK: &str = r#"[[package]]
name = "anemoi-models"
version = "0.3.0"

[[package]]
name = "anemoi-datasets"
version = "0.5.3"

[[package]]
name = "numpy"
version = "1.26.4"
"#;

    fn cli_for(dir: &Path) -> Cli {
        Cli {
            lock_file: dir.join("poetry.lock"),
            manifest: dir.join("pyproject.toml"),
            changelog: dir.join("CHANGELOG.rst"),
            prefix: version::DEFAULT_PACKAGE_PREFIX.to_string(),
            format: SectionFormat::Rst,
            verbose: false,
        }
    }

    fn write_project(dir: &Path, project_version: &str, lock: &str) {
        fs::write(
            dir.join("pyproject.toml"),
            format!("[tool.poetry]\nname = \"anemoi-release\"\nversion = \"{project_version}\"\n"),
        )
        .unwrap();
        fs::write(dir.join("poetry.lock"), lock).unwrap();
    }

    #[test]
    fn creates_changelog_with_sorted_packages() {
        let dir = TempDir::new().unwrap();
        write_project(dir.path(), "1.0.0", LOCK);

        let outcome = execute(&cli_for(dir.path())).unwrap();
        assert_eq!(outcome, UpdateOutcome::Created);

        let content = fs::read_to_string(dir.path().join("CHANGELOG.rst")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(&lines[..3], ["=========", "Changelog", "========="]);
        assert!(lines[4].starts_with("Version 1.0.0 ("));
        assert_eq!(
            &lines[lines.len() - 2..],
            ["* **anemoi-datasets**: ``0.5.3``", "* **anemoi-models**: ``0.3.0``"]
        );
        assert!(!content.contains("numpy"));
    }

    #[test]
    fn no_matching_packages_leaves_changelog_untouched() {
        let dir = TempDir::new().unwrap();
        write_project(
            dir.path(),
            "1.0.0",
            "[[package]]\nname = \"numpy\"\nversion = \"1.26.4\"\n",
        );

        let outcome = execute(&cli_for(dir.path())).unwrap();

        assert_eq!(outcome, UpdateOutcome::Skipped);
        assert!(!dir.path().join("CHANGELOG.rst").exists());
    }

    #[test]
    fn rerun_replaces_section() {
        let dir = TempDir::new().unwrap();
        write_project(dir.path(), "1.0.0", LOCK);
        execute(&cli_for(dir.path())).unwrap();

        write_project(dir.path(), "1.0.0", &LOCK.replace("0.3.0", "0.4.0"));
        let outcome = execute(&cli_for(dir.path())).unwrap();
        assert_eq!(outcome, UpdateOutcome::Replaced);

        let content = fs::read_to_string(dir.path().join("CHANGELOG.rst")).unwrap();
        assert!(content.contains("``0.4.0``"));
        assert!(!content.contains("``0.3.0``"));
        assert_eq!(content.matches("Changelog").count(), 1);
    }

    #[test]
    fn missing_lock_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        write_project(dir.path(), "1.0.0", LOCK);
        fs::remove_file(dir.path().join("poetry.lock")).unwrap();

        let err = execute(&cli_for(dir.path())).unwrap_err();
        assert!(err.user_message().starts_with("Failed to read package versions: File not found"));
    }

    #[test]
    fn missing_manifest_is_fatal() {
        let dir = TempDir::new().unwrap();
        write_project(dir.path(), "1.0.0", LOCK);
        fs::remove_file(dir.path().join("pyproject.toml")).unwrap();

        assert!(execute(&cli_for(dir.path())).is_err());
        assert!(!dir.path().join("CHANGELOG.rst").exists());
    }
}
