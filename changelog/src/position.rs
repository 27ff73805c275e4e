use crate::utils::{is_section_boundary, marker_version};
use std::ops::Range;

/// A `Version <token>` title line in the changelog body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMarker {
    pub line_index: usize,
    pub version: String,
}

/// All section markers at or after `start_idx`
pub fn find_section_markers(lines: &[String], start_idx: usize) -> Vec<SectionMarker> {
    lines
        .iter()
        .enumerate()
        .skip(start_idx)
        .filter_map(|(line_index, line)| {
            marker_version(line).map(|version| SectionMarker {
                line_index,
                version: version.to_string(),
            })
        })
        .collect()
}

/// Index of the first line after `start_idx` that opens another section
pub fn find_next_section_position(lines: &[String], start_idx: usize) -> usize {
    lines
        .iter()
        .skip(start_idx + 1)
        .position(|line| is_section_boundary(line))
        .map_or(lines.len(), |pos| pos + start_idx + 1)
}

/// Line range of the section whose marker carries exactly `version`
pub fn find_section_range(
    lines: &[String],
    start_idx: usize,
    version: &str,
) -> Option<Range<usize>> {
    let start = find_section_markers(lines, start_idx)
        .into_iter()
        .find(|marker| marker.version == version)?
        .line_index;

    Some(start..find_next_section_position(lines, start))
}
