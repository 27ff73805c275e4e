use crate::document::ChangelogDocument;
use crate::formatter::SectionFormatter;
use crate::types::{PackageSection, UpdateOutcome};

pub trait VersionUpdater {
    fn update_with_version(
        &self,
        document: &mut ChangelogDocument,
        section: &PackageSection,
    ) -> UpdateOutcome;
}

pub struct DefaultVersionUpdater<'a> {
    section_formatter: &'a dyn SectionFormatter,
}

impl<'a> DefaultVersionUpdater<'a> {
    pub fn new(section_formatter: &'a dyn SectionFormatter) -> Self {
        Self { section_formatter }
    }
}

impl VersionUpdater for DefaultVersionUpdater<'_> {
    fn update_with_version(
        &self,
        document: &mut ChangelogDocument,
        section: &PackageSection,
    ) -> UpdateOutcome {
        if section.packages.is_empty() {
            return UpdateOutcome::Skipped;
        }

        let replaced = document.remove_section(&section.version);
        document.insert_section(self.section_formatter.format(section));

        if replaced {
            UpdateOutcome::Replaced
        } else {
            UpdateOutcome::Created
        }
    }
}
