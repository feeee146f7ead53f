pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ranking::handlers as ranking;
use crate::resume::handlers as resume;
use crate::scoring::handlers as scoring;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Parsing
        .route("/api/v1/resumes/parse", post(resume::handle_parse_resume))
        .route("/api/v1/resumes/upload", post(resume::handle_upload_resume))
        .route("/api/v1/jobs/competencies", post(resume::handle_job_competencies))
        // Scoring and ranking
        .route("/api/v1/competencies/score", post(scoring::handle_score))
        .route("/api/v1/candidates/rank", post(ranking::handle_rank))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::scoring::scorer::KeywordCompetencyScorer;

    fn test_state() -> AppState {
        AppState {
            config: Config {
                port: 0,
                rust_log: "info".to_string(),
                anthropic_api_key: None,
                enable_llm_validation: false,
                llm_blend_weight: 0.3,
                max_resume_bytes: 10_000,
            },
            scorer: Arc::new(KeywordCompetencyScorer),
        }
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let response = build_router(test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let response = build_router(test_state())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_parse_resume_endpoint() {
        let (status, body) = post_json(
            "/api/v1/resumes/parse",
            json!({
                "resume_text": "Senior Software Engineer at Acme Corp, 2015-2020. - Led a team of 5 engineers."
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["experience"][0]["years_in_role"], 5);
        assert_eq!(body["experience"][0]["responsibilities"][0], "Led a team of 5 engineers.");
        assert_eq!(body["total_years_experience"], 5.0);
    }

    #[tokio::test]
    async fn test_parse_rejects_empty_text() {
        let (status, body) = post_json("/api/v1/resumes/parse", json!({"resume_text": "  "})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_parse_rejects_oversized_text() {
        let (status, _) = post_json(
            "/api/v1/resumes/parse",
            json!({"resume_text": "a".repeat(10_001)}),
        )
        .await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_score_with_empty_competency_list_is_neutral() {
        let (status, body) = post_json(
            "/api/v1/competencies/score",
            json!({"resume_text": "Python developer", "required_competencies": []}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["scoring"]["overall_fit_score"], 50);
        assert_eq!(body["scorer_backend"], "keyword");
    }

    #[tokio::test]
    async fn test_score_culture_narrative() {
        let (status, body) = post_json(
            "/api/v1/competencies/score",
            json!({
                "resume_text": "Agile engineer who likes to collaborate and mentor juniors.",
                "required_competencies": ["Python"]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["scoring"]["cultural_fit_index"], 78);
        assert_eq!(body["cultural_fit_narrative"], "High");
        assert_eq!(body["scoring"]["gaps"][0], "Python");
    }

    #[tokio::test]
    async fn test_score_requires_competencies_or_jd() {
        let (status, _) = post_json(
            "/api/v1/competencies/score",
            json!({"resume_text": "Python developer"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_job_competencies_endpoint() {
        let (status, body) = post_json(
            "/api/v1/jobs/competencies",
            json!({"jd_text": "Backend role: Rust, PostgreSQL and strong Communication"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["competencies"], json!(["Rust", "PostgreSQL", "Communication"]));
    }

    #[tokio::test]
    async fn test_rank_orders_candidates() {
        let (status, body) = post_json(
            "/api/v1/candidates/rank",
            json!({
                "required_competencies": ["Python", "Docker", "Kubernetes"],
                "candidates": [
                    {"id": "weak", "resume_text": "Office Manager at Globex"},
                    {"id": "strong", "resume_text": "Software Engineer at Acme, 2014-2022\n- Python, Docker and Kubernetes in an agile team"}
                ]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["candidates"][0]["id"], "strong");
        assert_eq!(body["candidates"][0]["rank"], 1);
        assert_eq!(body["candidates"][1]["id"], "weak");
        assert_eq!(body["candidates"][1]["rank"], 2);
        assert_eq!(body["candidates"][0]["total_years_experience"], 8.0);
    }

    #[tokio::test]
    async fn test_rank_rejects_duplicate_ids() {
        let (status, body) = post_json(
            "/api/v1/candidates/rank",
            json!({
                "required_competencies": ["Python"],
                "candidates": [
                    {"id": "a", "resume_text": "Python"},
                    {"id": "a", "resume_text": "Rust"}
                ]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"].as_str().unwrap().contains("duplicate"));
    }

    #[tokio::test]
    async fn test_rank_assigns_ids_when_missing() {
        let (status, body) = post_json(
            "/api/v1/candidates/rank",
            json!({
                "required_competencies": ["Python"],
                "candidates": [{"resume_text": "Python developer"}]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let id = body["candidates"][0]["id"].as_str().unwrap();
        assert!(uuid::Uuid::parse_str(id).is_ok());
    }
}
