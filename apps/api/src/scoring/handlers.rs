//! Axum route handlers for competency scoring.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::ranking::narrative::{cultural_fit_narrative, success_prediction};
use crate::resume::handlers::ensure_resume_text;
use crate::resume::job_description::extract_required_competencies;
use crate::resume::models::ParsedResume;
use crate::resume::parse_resume;
use crate::resume::vocabulary::Vocabulary;
use crate::scoring::competency::ScoringResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub resume_text: String,
    /// Explicit competency list. Takes precedence over `jd_text`.
    pub required_competencies: Option<Vec<String>>,
    pub jd_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub parsed_resume: ParsedResume,
    pub scoring: ScoringResult,
    pub required_competencies: Vec<String>,
    pub cultural_fit_narrative: String,
    pub success_prediction: String,
    pub scorer_backend: String,
}

/// Picks the competency list for a request: the explicit list when given (even if
/// empty), otherwise the competencies found in the job description.
pub fn resolve_competencies(
    required: Option<Vec<String>>,
    jd_text: Option<&str>,
) -> Result<Vec<String>, AppError> {
    match (required, jd_text) {
        (Some(list), _) => Ok(list
            .into_iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect()),
        (None, Some(jd)) if !jd.trim().is_empty() => {
            Ok(extract_required_competencies(jd, Vocabulary::standard()))
        }
        _ => Err(AppError::Validation(
            "provide required_competencies or jd_text".to_string(),
        )),
    }
}

/// POST /api/v1/competencies/score
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    ensure_resume_text(&request.resume_text, state.config.max_resume_bytes)?;
    let required =
        resolve_competencies(request.required_competencies, request.jd_text.as_deref())?;

    let parsed_resume = parse_resume(&request.resume_text);
    let scoring = state
        .scorer
        .score(&parsed_resume.skills, &required, &request.resume_text)
        .await?;

    info!(
        competencies = required.len(),
        overall_fit = scoring.overall_fit_score,
        ranking = scoring.ranking_score,
        backend = state.scorer.backend(),
        "Candidate scored"
    );

    Ok(Json(ScoreResponse {
        cultural_fit_narrative: cultural_fit_narrative(scoring.cultural_fit_index).to_string(),
        success_prediction: success_prediction(
            scoring.overall_fit_score,
            scoring.cultural_fit_index,
            parsed_resume.total_years_experience,
        )
        .to_string(),
        scorer_backend: state.scorer.backend().to_string(),
        parsed_resume,
        scoring,
        required_competencies: required,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_list_wins_over_jd() {
        let list = resolve_competencies(Some(vec![" Rust ".into(), "".into()]), Some("Python"))
            .unwrap();
        assert_eq!(list, vec!["Rust"]);
    }

    #[test]
    fn test_explicit_empty_list_is_allowed() {
        assert!(resolve_competencies(Some(vec![]), None).unwrap().is_empty());
    }

    #[test]
    fn test_falls_back_to_jd() {
        let list = resolve_competencies(None, Some("We need Go and Docker")).unwrap();
        assert_eq!(list, vec!["Go", "Docker"]);
    }

    #[test]
    fn test_missing_both_is_validation_error() {
        assert!(matches!(
            resolve_competencies(None, Some("  ")),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            resolve_competencies(None, None),
            Err(AppError::Validation(_))
        ));
    }
}
