//! Axum route handlers for the Screening API.
//!
//! Handlers are stateless: nothing is persisted, every response is derived from the request.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::document::{decode, DocumentKind};
use crate::errors::AppError;
use crate::screening::extractor::extract;
use crate::screening::models::{CandidateProfile, JobSpec};
use crate::screening::ranking::{rank, AnalysisResult, SortField, SortOrder};
use crate::screening::scorer::CandidateScorer;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ParseResumeRequest {
    pub text: String,
    /// Caller's identifier for the source document, echoed back.
    #[serde(default)]
    pub source_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ParseResumeResponse {
    pub document_id: Uuid,
    pub source_id: Option<String>,
    pub profile: CandidateProfile,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub candidate_id: Option<String>,
    #[serde(default)]
    pub candidate: CandidateProfile,
    #[serde(default)]
    pub job: JobSpec,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub scorer_backend: String,
    pub analyzed_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct BulkCandidate {
    #[serde(default)]
    pub candidate_id: Option<String>,
    #[serde(default)]
    pub candidate: CandidateProfile,
}

#[derive(Debug, Deserialize)]
pub struct BulkAnalyzeRequest {
    #[serde(default)]
    pub job: JobSpec,
    #[serde(default)]
    pub candidates: Vec<BulkCandidate>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BulkAnalysisResponse {
    pub job: JobSpec,
    pub total_candidates: usize,
    pub sorted_by: SortField,
    pub order: SortOrder,
    pub results: Vec<AnalysisResult>,
    pub scorer_backend: String,
    pub analyzed_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/parse
///
/// Extracts a candidate profile from already-decoded resume text.
pub async fn handle_parse_resume(
    Json(request): Json<ParseResumeRequest>,
) -> Result<Json<ParseResumeResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    Ok(Json(parse_text(&request.text, request.source_id)))
}

/// POST /api/v1/resumes/upload
///
/// Accepts a multipart `file` field (PDF or plain text), decodes it and extracts a profile.
pub async fn handle_upload_resume(
    mut multipart: Multipart,
) -> Result<Json<ParseResumeResponse>, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(map_multipart_error)? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let kind = DocumentKind::resolve(content_type.as_deref(), file_name.as_deref())?;
        let data = field.bytes().await.map_err(map_multipart_error)?;

        info!(?kind, file_name = ?file_name, bytes = data.len(), "Resume upload received");
        let text = decode(kind, data).await?;

        return Ok(Json(parse_text(&text, file_name)));
    }

    Err(AppError::Validation("multipart field 'file' is required".to_string()))
}

/// POST /api/v1/analyze
///
/// Scores one candidate against one job and reports the skill gap.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let result = analyze_candidate(
        state.scorer.as_ref(),
        request.candidate_id,
        request.candidate,
        &request.job,
    );

    info!(
        overall = result.score.overall_score,
        matching = result.matching_skills.len(),
        missing = result.missing_skills.len(),
        "Candidate analyzed"
    );

    Ok(Json(AnalysisResponse {
        result,
        scorer_backend: state.scorer.backend().to_string(),
        analyzed_at: Utc::now(),
    }))
}

/// POST /api/v1/analyze/bulk
///
/// Scores every supplied candidate against one job and returns them ranked.
pub async fn handle_bulk_analyze(
    State(state): State<AppState>,
    Json(request): Json<BulkAnalyzeRequest>,
) -> Result<Json<BulkAnalysisResponse>, AppError> {
    let limit = state.config.max_bulk_candidates;
    if request.candidates.len() > limit {
        return Err(AppError::Validation(format!(
            "at most {limit} candidates may be analyzed per request, got {}",
            request.candidates.len()
        )));
    }

    let sorted_by = SortField::parse(request.sort_by.as_deref());
    let order = SortOrder::parse(request.order.as_deref());

    let mut results: Vec<AnalysisResult> = request
        .candidates
        .into_iter()
        .map(|c| {
            analyze_candidate(
                state.scorer.as_ref(),
                c.candidate_id,
                c.candidate,
                &request.job,
            )
        })
        .collect();
    rank(&mut results, sorted_by, order);

    info!(
        candidates = results.len(),
        required_skills = request.job.required_skills.len(),
        ?sorted_by,
        ?order,
        "Bulk analysis complete"
    );

    Ok(Json(BulkAnalysisResponse {
        job: request.job,
        total_candidates: results.len(),
        sorted_by,
        order,
        results,
        scorer_backend: state.scorer.backend().to_string(),
        analyzed_at: Utc::now(),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn parse_text(text: &str, source_id: Option<String>) -> ParseResumeResponse {
    let document_id = Uuid::new_v4();
    let profile = extract(text);

    info!(
        %document_id,
        source_id = ?source_id,
        skills = profile.skills.len(),
        has_email = !profile.email.is_empty(),
        "Resume parsed"
    );

    ParseResumeResponse {
        document_id,
        source_id,
        profile,
    }
}

fn analyze_candidate(
    scorer: &dyn CandidateScorer,
    candidate_id: Option<String>,
    candidate: CandidateProfile,
    job: &JobSpec,
) -> AnalysisResult {
    let score = scorer.score(&candidate, job);
    let analysis = scorer.analyze_skills(&candidate.skills, &job.required_skills);

    AnalysisResult {
        candidate_id,
        candidate,
        score,
        matching_skills: analysis.matching,
        missing_skills: analysis.missing,
    }
}

fn map_multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::Validation(err.body_text())
    }
}
