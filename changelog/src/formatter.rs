use crate::config::ChangelogConfig;
use crate::types::PackageSection;

// --- Traits ---

pub trait HeaderFormatter: Send + Sync {
    fn format(&self, version: &str, date: &str) -> Vec<String>;
}

pub trait SectionFormatter: Send + Sync {
    fn format(&self, section: &PackageSection) -> Vec<String>;
}

// Header Formatters

/// reStructuredText title underlined with `=` to the title's width
#[derive(Debug, Clone)]
pub struct RstHeaderFormatter;

impl HeaderFormatter for RstHeaderFormatter {
    fn format(&self, version: &str, date: &str) -> Vec<String> {
        let title = format!("Version {version} ({date})");
        let underline = "=".repeat(title.chars().count());
        vec![title, underline]
    }
}

#[derive(Debug, Clone)]
pub struct MarkdownHeaderFormatter;

impl HeaderFormatter for MarkdownHeaderFormatter {
    fn format(&self, version: &str, date: &str) -> Vec<String> {
        vec![format!("## Version {version} ({date})")]
    }
}

// Section Formatters

#[derive(Debug, Clone)]
pub struct RstSectionFormatter {
    pub subtitle: String,
    pub subtitle_underline_len: usize,
}

impl SectionFormatter for RstSectionFormatter {
    fn format(&self, section: &PackageSection) -> Vec<String> {
        let mut lines = RstHeaderFormatter.format(&section.version, &section.date);
        lines.reserve(section.packages.len() + 4);
        lines.push(String::new());
        lines.push(self.subtitle.clone());
        lines.push("-".repeat(self.subtitle_underline_len));
        lines.push(String::new());
        for (name, version) in &section.packages {
            lines.push(format!("* **{name}**: ``{version}``"));
        }
        lines
    }
}

#[derive(Debug, Clone)]
pub struct MarkdownSectionFormatter {
    pub subtitle: String,
}

impl SectionFormatter for MarkdownSectionFormatter {
    fn format(&self, section: &PackageSection) -> Vec<String> {
        let mut lines = MarkdownHeaderFormatter.format(&section.version, &section.date);
        lines.push(String::new());
        lines.push(format!("### {}", self.subtitle));
        lines.push(String::new());
        for (name, version) in &section.packages {
            lines.push(format!("- **{name}**: `{version}`"));
        }
        lines
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChangelogFormat {
    #[default]
    Rst,
    Markdown,
}

pub fn create_section_formatter(
    format: ChangelogFormat,
    config: &ChangelogConfig,
) -> Box<dyn SectionFormatter> {
    match format {
        ChangelogFormat::Rst => Box::new(RstSectionFormatter {
            subtitle: config.subtitle.clone(),
            subtitle_underline_len: config.subtitle_underline_len,
        }),
        ChangelogFormat::Markdown => Box::new(MarkdownSectionFormatter {
            subtitle: config.subtitle.clone(),
        }),
    }
}
