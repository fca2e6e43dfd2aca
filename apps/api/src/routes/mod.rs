pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::screening::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Extraction API
        .route("/api/v1/resumes/parse", post(handlers::handle_parse_resume))
        .route("/api/v1/resumes/upload", post(handlers::handle_upload_resume))
        // Scoring API
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route("/api/v1/analyze/bulk", post(handlers::handle_bulk_analyze))
        .layer(body_limit)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const BOUNDARY: &str = "screener-test-boundary";

    fn app_with(config: Config) -> Router {
        build_router(AppState::new(config))
    }

    fn app() -> Router {
        app_with(Config::default())
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, json)
    }

    fn post_json(path: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_multipart(
        field: &str,
        file_name: &str,
        content_type: &str,
        data: &str,
    ) -> Request<Body> {
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n\
             Content-Type: {content_type}\r\n\r\n\
             {data}\r\n\
             --{BOUNDARY}--\r\n"
        );
        Request::builder()
            .method("POST")
            .uri("/api/v1/resumes/upload")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "screener");
    }

    #[tokio::test]
    async fn test_parse_resume_returns_profile() {
        let request = post_json(
            "/api/v1/resumes/parse",
            json!({
                "text": "Jane Doe\njane.doe@example.com\nBuilt React apps on Python services.",
                "source_id": "cv-42"
            }),
        );
        let (status, body) = send(app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source_id"], "cv-42");
        assert_eq!(body["profile"]["name"], "Jane Doe");
        assert_eq!(body["profile"]["email"], "jane.doe@example.com");
        let skills = body["profile"]["skills"].as_array().unwrap();
        assert!(skills.contains(&json!("React")));
        assert!(skills.contains(&json!("Python")));
        assert!(body["document_id"].is_string());
    }

    #[tokio::test]
    async fn test_parse_resume_rejects_blank_text() {
        let request = post_json("/api/v1/resumes/parse", json!({ "text": "   " }));
        let (status, body) = send(app(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_analyze_scores_candidate() {
        let request = post_json(
            "/api/v1/analyze",
            json!({
                "candidate": { "name": "Jane Doe", "skills": ["react", "nodejs"] },
                "job": { "required_skills": ["React", "AWS"] }
            }),
        );
        let (status, body) = send(app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"]["skill_match_score"], 40.0);
        assert_eq!(body["score"]["experience_score"], 50.0);
        assert_eq!(body["score"]["overall_score"], 44.0);
        assert_eq!(body["matching_skills"], json!(["React"]));
        assert_eq!(body["missing_skills"], json!(["AWS"]));
        assert_eq!(body["candidate"]["name"], "Jane Doe");
        assert_eq!(body["scorer_backend"], "keyword");
    }

    #[tokio::test]
    async fn test_bulk_analyze_ranks_by_overall_score() {
        let request = post_json(
            "/api/v1/analyze/bulk",
            json!({
                "job": { "required_skills": ["Rust", "Go"] },
                "candidates": [
                    { "candidate_id": "weak", "candidate": { "skills": ["Java"] } },
                    { "candidate_id": "strong", "candidate": { "skills": ["rust", "go"] } },
                    { "candidate_id": "partial", "candidate": { "skills": ["Rust"] } }
                ]
            }),
        );
        let (status, body) = send(app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_candidates"], 3);
        assert_eq!(body["sorted_by"], "overall_score");
        assert_eq!(body["order"], "desc");
        let ids: Vec<&str> = body["results"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["candidate_id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["strong", "partial", "weak"]);
    }

    #[tokio::test]
    async fn test_bulk_analyze_enforces_candidate_limit() {
        let config = Config {
            max_bulk_candidates: 1,
            ..Config::default()
        };
        let request = post_json(
            "/api/v1/analyze/bulk",
            json!({
                "job": { "required_skills": ["Rust"] },
                "candidates": [ { "candidate": {} }, { "candidate": {} } ]
            }),
        );
        let (status, body) = send(app_with(config), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_upload_plain_text_resume() {
        let request = post_multipart(
            "file",
            "jane.txt",
            "text/plain",
            "Jane Doe\njane.doe@example.com\nSkills\nRust, Kafka",
        );
        let (status, body) = send(app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source_id"], "jane.txt");
        assert_eq!(body["profile"]["name"], "Jane Doe");
        let skills = body["profile"]["skills"].as_array().unwrap();
        assert!(skills.contains(&json!("Kafka")));
    }

    #[tokio::test]
    async fn test_upload_docx_is_unsupported() {
        let request = post_multipart(
            "file",
            "jane.docx",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            "PK",
        );
        let (status, body) = send(app(), request).await;

        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["error"]["code"], "UNSUPPORTED_FORMAT");
    }

    #[tokio::test]
    async fn test_upload_without_file_field_is_rejected() {
        let request = post_multipart("attachment", "jane.txt", "text/plain", "Jane Doe");
        let (status, body) = send(app(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_upload_over_limit_is_rejected() {
        let config = Config {
            max_upload_bytes: 64,
            ..Config::default()
        };
        let request = post_multipart("file", "big.txt", "text/plain", &"x".repeat(1024));
        let (status, _) = send(app_with(config), request).await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }
}
