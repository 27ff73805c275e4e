use once_cell::sync::Lazy;
use regex::Regex;

/// `name = "..."` at the start of a line
pub static NAME_DECLARATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^name = "([^"]+)""#).expect("Failed to compile name declaration regex")
});

/// `version = "..."` at the start of a line
pub static VERSION_DECLARATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^version = "([^"]+)""#).expect("Failed to compile version declaration regex")
});

/// Returns the quoted value if `line` matches `pattern`.
pub fn declared_value<'a>(pattern: &Regex, line: &'a str) -> Option<&'a str> {
    pattern
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}
