//! Ordering of bulk analysis results.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::screening::models::{CandidateProfile, ScoreResult};

/// Score column used to rank candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    OverallScore,
    SkillMatchScore,
    ExperienceScore,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortField {
    /// Lenient parse: unknown names fall back to the overall score.
    pub fn parse(name: Option<&str>) -> Self {
        match name.map(|n| n.trim().to_ascii_lowercase()).as_deref() {
            Some("skill_match_score") => SortField::SkillMatchScore,
            Some("experience_score") => SortField::ExperienceScore,
            _ => SortField::OverallScore,
        }
    }

    fn value(self, score: &ScoreResult) -> f64 {
        match self {
            SortField::OverallScore => score.overall_score,
            SortField::SkillMatchScore => score.skill_match_score,
            SortField::ExperienceScore => score.experience_score,
        }
    }
}

impl SortOrder {
    pub fn parse(name: Option<&str>) -> Self {
        match name.map(|n| n.trim().to_ascii_lowercase()).as_deref() {
            Some("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }
}

/// Score plus skill gap for one candidate against one job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_id: Option<String>,
    pub candidate: CandidateProfile,
    pub score: ScoreResult,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Stable sort: candidates with equal scores keep their input order.
pub fn rank(results: &mut [AnalysisResult], field: SortField, order: SortOrder) {
    results.sort_by(|a, b| {
        let ord = field
            .value(&a.score)
            .partial_cmp(&field.value(&b.score))
            .unwrap_or(Ordering::Equal);
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
}
