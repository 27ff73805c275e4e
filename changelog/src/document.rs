use crate::position::{find_section_markers, find_section_range, SectionMarker};
use std::ops::Range;

/// A changelog held as lines. The first `header_len` lines are a fixed
/// header that is never scanned for sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogDocument {
    lines: Vec<String>,
    header_len: usize,
}

impl ChangelogDocument {
    pub fn parse(content: &str, header_lines: usize) -> Self {
        let lines: Vec<String> = content.lines().map(ToString::to_string).collect();
        let header_len = header_lines.min(lines.len());
        Self { lines, header_len }
    }

    pub fn with_header<S: AsRef<str>>(header: &[S]) -> Self {
        Self {
            lines: header.iter().map(|line| line.as_ref().to_string()).collect(),
            header_len: header.len(),
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.lines[..self.header_len]
    }

    #[must_use]
    pub fn body(&self) -> &[String] {
        &self.lines[self.header_len..]
    }

    #[must_use]
    pub fn markers(&self) -> Vec<SectionMarker> {
        find_section_markers(&self.lines, self.header_len)
    }

    #[must_use]
    pub fn find_section(&self, version: &str) -> Option<Range<usize>> {
        find_section_range(&self.lines, self.header_len, version)
    }

    #[must_use]
    pub fn has_section(&self, version: &str) -> bool {
        self.find_section(version).is_some()
    }

    /// Removes every section for `version`, returning whether any existed
    pub fn remove_section(&mut self, version: &str) -> bool {
        let mut removed = false;
        while let Some(range) = self.find_section(version) {
            self.lines.drain(range);
            removed = true;
        }
        removed
    }

    /// Places `section` right after the header, ahead of all existing
    /// content, with one blank line on either side
    pub fn insert_section(&mut self, section: Vec<String>) {
        let body: Vec<String> = self
            .lines
            .drain(self.header_len..)
            .skip_while(|line| line.trim().is_empty())
            .collect();

        self.lines.reserve(section.len() + body.len() + 2);
        self.lines.push(String::new());
        self.lines.extend(section);
        if !body.is_empty() {
            self.lines.push(String::new());
            self.lines.extend(body);
        }
    }

    /// Joins the lines with `\n`, dropping trailing blank lines and ending
    /// with a single newline
    #[must_use]
    pub fn render(&self) -> String {
        let end = self
            .lines
            .iter()
            .rposition(|line| !line.trim().is_empty())
            .map_or(0, |pos| pos + 1);

        let mut rendered = self.lines[..end].join("\n");
        rendered.push('\n');
        rendered
    }
}
