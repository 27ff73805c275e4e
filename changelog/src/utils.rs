use once_cell::sync::Lazy;
use regex::Regex;

/// `Version <token>` title line, optionally dated, optionally in the older
/// markdown `## Version <token>` form
pub static SECTION_MARKER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:## )?Version (\S+)(?: \([^)]*\))?\s*$")
        .expect("Failed to compile section marker regex")
});

/// Any line that starts a new section, including hand-written titles such as
/// `Version 1.0.0 - initial release`
pub static SECTION_BOUNDARY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:## )?Version \S").expect("Failed to compile section boundary regex")
});

/// Version token of a section marker line, if `line` is one
pub fn marker_version(line: &str) -> Option<&str> {
    SECTION_MARKER_PATTERN
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

pub fn is_section_boundary(line: &str) -> bool {
    SECTION_BOUNDARY_PATTERN.is_match(line)
}
