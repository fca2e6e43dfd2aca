//! Candidate Scorer — pluggable, trait-based scoring of a candidate profile against a job.
//!
//! Default: `KeywordScorer` (pure-Rust, deterministic, no external calls).
//!
//! `AppState` holds an `Arc<dyn CandidateScorer>` so handlers never name the backend.

use crate::screening::models::{CandidateProfile, JobSpec, ScoreResult, SkillAnalysis};
use crate::screening::vocabulary::is_stop_word;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores candidates against jobs. Implementations must be pure: identical inputs give
/// identical outputs and no call fails.
pub trait CandidateScorer: Send + Sync {
    fn score(&self, profile: &CandidateProfile, job: &JobSpec) -> ScoreResult;

    fn analyze_skills(&self, candidate_skills: &[String], required_skills: &[String])
        -> SkillAnalysis;

    /// Label reported alongside results, for transparency.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordScorer
// ────────────────────────────────────────────────────────────────────────────

/// Rule-based scorer.
///
/// Algorithm:
/// 1. skill match: exact (case-insensitive) hits weigh 80, substring hits 20, per required skill
/// 2. experience: requirement keyword coverage by experience keywords, plus a length bonus ≤ 20
/// 3. overall = 0.6 × skill + 0.4 × experience
pub struct KeywordScorer;

impl CandidateScorer for KeywordScorer {
    fn score(&self, profile: &CandidateProfile, job: &JobSpec) -> ScoreResult {
        score(profile, job)
    }

    fn analyze_skills(
        &self,
        candidate_skills: &[String],
        required_skills: &[String],
    ) -> SkillAnalysis {
        analyze_skills(candidate_skills, required_skills)
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core scoring algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Returned when there is nothing to compare against.
pub const NEUTRAL_SCORE: f64 = 50.0;

const EXACT_WEIGHT: f64 = 80.0;
const PARTIAL_WEIGHT: f64 = 20.0;
const MAX_KEYWORDS: usize = 50;
const MAX_LENGTH_BONUS: f64 = 20.0;
const CHARS_PER_BONUS_POINT: f64 = 100.0;

pub fn score(profile: &CandidateProfile, job: &JobSpec) -> ScoreResult {
    let skill = skill_match_score(&profile.skills, &job.required_skills);
    let experience = experience_score(&profile.experience_text, &job.requirements_text);
    ScoreResult::from_components(skill, experience)
}

/// Partitions `required_skills` into skills some candidate skill relates to (equality or
/// substring in either direction, case-insensitive) and the rest. Order is preserved.
pub fn analyze_skills(candidate_skills: &[String], required_skills: &[String]) -> SkillAnalysis {
    let candidate_lower = lowercase_all(candidate_skills);

    let (matching, missing): (Vec<String>, Vec<String>) = required_skills
        .iter()
        .cloned()
        .partition(|required| relates_to_any(&required.to_lowercase(), &candidate_lower));

    SkillAnalysis { matching, missing }
}

fn skill_match_score(candidate_skills: &[String], required_skills: &[String]) -> f64 {
    if required_skills.is_empty() {
        return NEUTRAL_SCORE;
    }
    if candidate_skills.is_empty() {
        return 0.0;
    }

    let candidate_lower = lowercase_all(candidate_skills);
    let mut exact = 0usize;
    let mut partial = 0usize;

    for required in required_skills {
        let required_lower = required.to_lowercase();
        if candidate_lower.iter().any(|c| *c == required_lower) {
            exact += 1;
        } else if relates_to_any(&required_lower, &candidate_lower) {
            partial += 1;
        }
    }

    let total = required_skills.len() as f64;
    let raw = (exact as f64 / total) * EXACT_WEIGHT + (partial as f64 / total) * PARTIAL_WEIGHT;
    raw.min(100.0)
}

fn experience_score(candidate_experience: &str, job_requirements: &str) -> f64 {
    if candidate_experience.is_empty() || job_requirements.is_empty() {
        return NEUTRAL_SCORE;
    }

    let experience_words = extract_keywords(candidate_experience);
    let requirement_words = extract_keywords(job_requirements);

    if requirement_words.is_empty() {
        return NEUTRAL_SCORE;
    }

    let matches = requirement_words
        .iter()
        .filter(|req| relates_to_any(req, &experience_words))
        .count();

    let base = (matches as f64 / requirement_words.len() as f64) * 100.0;
    let length_bonus =
        (candidate_experience.chars().count() as f64 / CHARS_PER_BONUS_POINT).min(MAX_LENGTH_BONUS);

    (base + length_bonus).min(100.0)
}

/// Lowercase content words in scan order: split on non-word characters, drop short tokens,
/// stop words and bare numbers, keep the first 50.
pub fn extract_keywords(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|word| {
            word.chars().count() > 2
                && !is_stop_word(word)
                && !word.chars().all(|c| c.is_ascii_digit())
        })
        .take(MAX_KEYWORDS)
        .map(String::from)
        .collect()
}

/// Substring containment in either direction against any candidate. Intentionally loose:
/// a two-letter candidate such as "ai" relates to every word containing it.
fn relates_to_any(needle: &str, candidates: &[String]) -> bool {
    candidates
        .iter()
        .any(|c| c.contains(needle) || needle.contains(c.as_str()))
}

fn lowercase_all(items: &[String]) -> Vec<String> {
    items.iter().map(|s| s.to_lowercase()).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
