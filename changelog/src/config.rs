/// Header written to a changelog that does not exist yet
pub const DEFAULT_HEADER: [&str; 3] = ["=========", "Changelog", "========="];

/// Configuration options for changelog formatting and behavior
#[derive(Debug, Clone)]
pub struct ChangelogConfig {
    pub date_format: String,
    /// Lines at the top of the document that are never touched
    pub header_lines: usize,
    pub default_header: Vec<String>,
    pub subtitle: String,
    pub subtitle_underline_len: usize,
    pub verbose: bool,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            date_format: "%Y-%m-%d".to_string(),
            header_lines: DEFAULT_HEADER.len(),
            default_header: DEFAULT_HEADER.iter().map(ToString::to_string).collect(),
            subtitle: "Anemoi Package Versions".to_string(),
            subtitle_underline_len: 24,
            verbose: false,
        }
    }
}
