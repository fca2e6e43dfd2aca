//! Value records produced and consumed by the screening engine.
//!
//! Every record defaults each field explicitly, so a partially supplied JSON body
//! (or a hand-built profile) is always a complete value.

use serde::{Deserialize, Serialize};

/// Structured view of a resume. Built once per extraction and never mutated afterwards;
/// build a new one through [`CandidateProfile::builder`] instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Discovery order, case-insensitively unique.
    pub skills: Vec<String>,
    pub experience_text: String,
    pub education_text: String,
    pub summary: String,
}

impl CandidateProfile {
    pub fn builder() -> CandidateProfileBuilder {
        CandidateProfileBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct CandidateProfileBuilder {
    profile: CandidateProfile,
}

impl CandidateProfileBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.profile.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.profile.email = email.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.profile.phone = phone.into();
        self
    }

    pub fn skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.profile.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn experience_text(mut self, text: impl Into<String>) -> Self {
        self.profile.experience_text = text.into();
        self
    }

    pub fn education_text(mut self, text: impl Into<String>) -> Self {
        self.profile.education_text = text.into();
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.profile.summary = summary.into();
        self
    }

    pub fn build(self) -> CandidateProfile {
        self.profile
    }
}

/// Caller-supplied job criteria.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobSpec {
    pub required_skills: Vec<String>,
    pub requirements_text: String,
}

/// Candidate-vs-job scores, each in 0–100 and rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub skill_match_score: f64,
    pub experience_score: f64,
    pub overall_score: f64,
}

/// Weight of the skill component in the overall score; experience takes the rest.
pub const SKILL_WEIGHT: f64 = 0.6;
pub const EXPERIENCE_WEIGHT: f64 = 0.4;

impl ScoreResult {
    /// Combines unrounded component scores. The overall score is weighted before rounding.
    pub fn from_components(skill_match_score: f64, experience_score: f64) -> Self {
        let overall = skill_match_score * SKILL_WEIGHT + experience_score * EXPERIENCE_WEIGHT;
        Self {
            skill_match_score: round2(skill_match_score),
            experience_score: round2(experience_score),
            overall_score: round2(overall),
        }
    }
}

/// Required skills split into those the candidate covers and those they lack.
/// Together the two lists are exactly the required skills, in their original order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillAnalysis {
    pub matching: Vec<String>,
    pub missing: Vec<String>,
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
