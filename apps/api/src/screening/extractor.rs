//! Resume Extractor — rule-based structuring of decoded resume text into a `CandidateProfile`.
//!
//! Pure and total: malformed or empty input yields a profile with empty fields, never an error.
//! Field rules:
//! - email / phone: first regex match in the whole text
//! - name: first short, digit-free, non-email line among the first five non-blank lines
//! - skills: reference vocabulary hits, then entries from a labelled skills section (max 20)
//! - experience / education: section lookup via [`extract_section`]
//! - summary: first three substantial sentences, ellipsis-truncated at 200 characters

use lazy_static::lazy_static;
use regex::Regex;

use crate::screening::models::CandidateProfile;
use crate::screening::sections::extract_section;
use crate::screening::vocabulary::{
    EDUCATION_HEADINGS, EXPERIENCE_HEADINGS, SKILLS_HEADINGS, SKILL_VOCABULARY,
};

lazy_static! {
    // ASCII boundaries: an address glued to non-ASCII letters is still found.
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"(?-u:\b)[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}(?-u:\b)"
    )
    .unwrap();
    static ref PHONE_REGEX: Regex = Regex::new(
        r"(?:\+?1[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}|\b[0-9]{10}\b"
    )
    .unwrap();
    static ref DIGIT_RUN_REGEX: Regex = Regex::new(r"[0-9]{3,}").unwrap();
    static ref SENTENCE_BREAK_REGEX: Regex = Regex::new(r"[.!?]+").unwrap();
    static ref SKILL_SEPARATOR_REGEX: Regex = Regex::new(r"[,\n\r;]").unwrap();
}

const NAME_SCAN_LINES: usize = 5;
const MAX_SKILLS: usize = 20;
const MAX_SECTION_SKILLS: usize = 10;
const SUMMARY_SENTENCES: usize = 3;
const MIN_SENTENCE_CHARS: usize = 20;
const MAX_SUMMARY_CHARS: usize = 200;

/// Structures raw resume text into a candidate profile.
pub fn extract(text: &str) -> CandidateProfile {
    CandidateProfile::builder()
        .name(extract_name(text))
        .email(first_match(&EMAIL_REGEX, text))
        .phone(first_match(&PHONE_REGEX, text))
        .skills(extract_skills(text))
        .experience_text(extract_section(text, EXPERIENCE_HEADINGS))
        .education_text(extract_section(text, EDUCATION_HEADINGS))
        .summary(extract_summary(text))
        .build()
}

fn first_match(re: &Regex, text: &str) -> String {
    re.find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

fn extract_name(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(NAME_SCAN_LINES)
        .find(|line| {
            let len = line.chars().count();
            len > 2 && len < 50 && !line.contains('@') && !DIGIT_RUN_REGEX.is_match(line)
        })
        .map(String::from)
        .unwrap_or_default()
}

fn extract_skills(text: &str) -> Vec<String> {
    let lower_text = text.to_lowercase();

    let mut skills: Vec<String> = SKILL_VOCABULARY
        .iter()
        .filter(|skill| lower_text.contains(&skill.to_lowercase()))
        .map(|skill| skill.to_string())
        .collect();

    let section = extract_section(text, SKILLS_HEADINGS);
    if !section.is_empty() {
        let listed = SKILL_SEPARATOR_REGEX
            .split(&section)
            .map(str::trim)
            .filter(|s| {
                let len = s.chars().count();
                len > 1 && len < 30
            })
            .take(MAX_SECTION_SKILLS);

        for skill in listed {
            let lower = skill.to_lowercase();
            if !skills.iter().any(|existing| existing.to_lowercase() == lower) {
                skills.push(skill.to_string());
            }
        }
    }

    skills.truncate(MAX_SKILLS);
    skills
}

fn extract_summary(text: &str) -> String {
    let sentences: Vec<&str> = SENTENCE_BREAK_REGEX
        .split(text)
        .filter(|s| s.trim().chars().count() > MIN_SENTENCE_CHARS)
        .take(SUMMARY_SENTENCES)
        .collect();

    let summary = sentences.join(". ").trim().to_string();
    if summary.chars().count() > MAX_SUMMARY_CHARS {
        let truncated: String = summary.chars().take(MAX_SUMMARY_CHARS).collect();
        format!("{truncated}...")
    } else {
        summary
    }
}
