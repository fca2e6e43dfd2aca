//! Line-oriented section lookup shared by every section-based field.
//!
//! A section starts at the first line mentioning one of its heading keywords and ends at the
//! next line naming a different major section. Matching is case-insensitive substring
//! matching, so "work" also hits "network"; callers get consistent boundaries either way.

use crate::screening::vocabulary::MAJOR_SECTIONS;

/// Returns the trimmed text of the section introduced by any of `headings`, including the
/// heading line itself. Empty when no line mentions a heading.
pub fn extract_section(text: &str, headings: &[&str]) -> String {
    let lines: Vec<&str> = text.split('\n').collect();

    let Some(start) = lines.iter().position(|line| mentions_any(line, headings)) else {
        return String::new();
    };

    let end = lines[start + 1..]
        .iter()
        .position(|line| mentions_any(line, MAJOR_SECTIONS) && !mentions_any(line, headings))
        .map(|offset| start + 1 + offset)
        .unwrap_or(lines.len());

    lines[start..end].join("\n").trim().to_string()
}

fn mentions_any(line: &str, keywords: &[&str]) -> bool {
    let lower = line.trim().to_lowercase();
    keywords.iter().any(|kw| lower.contains(kw))
}
