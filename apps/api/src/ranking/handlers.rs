//! Axum route handler for batch candidate ranking.

use std::collections::{HashMap, HashSet};

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::ranking::narrative::{cultural_fit_narrative, success_prediction};
use crate::ranking::{rank_candidates, CandidateScore};
use crate::resume::handlers::ensure_resume_text;
use crate::resume::parse_resume;
use crate::scoring::competency::ScoringResult;
use crate::scoring::handlers::resolve_competencies;
use crate::state::AppState;

const MAX_BATCH_SIZE: usize = 100;

#[derive(Debug, Deserialize)]
pub struct CandidateInput {
    /// Caller-supplied identifier; a UUID is assigned when absent.
    pub id: Option<String>,
    pub resume_text: String,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub candidates: Vec<CandidateInput>,
    pub required_competencies: Option<Vec<String>>,
    pub jd_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RankedCandidateView {
    pub id: String,
    pub rank: usize,
    pub result: ScoringResult,
    pub total_years_experience: f64,
    pub cultural_fit_narrative: String,
    pub success_prediction: String,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub candidates: Vec<RankedCandidateView>,
    pub required_competencies: Vec<String>,
    pub scorer_backend: String,
}

/// POST /api/v1/candidates/rank
///
/// Parses and scores every resume against one competency list, then orders them.
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    if request.candidates.is_empty() {
        return Err(AppError::Validation("candidates cannot be empty".to_string()));
    }
    if request.candidates.len() > MAX_BATCH_SIZE {
        return Err(AppError::Validation(format!(
            "at most {MAX_BATCH_SIZE} candidates per request"
        )));
    }
    let required =
        resolve_competencies(request.required_competencies, request.jd_text.as_deref())?;

    let mut seen_ids = HashSet::new();
    let mut years_by_id = HashMap::new();
    let mut batch = Vec::with_capacity(request.candidates.len());

    for candidate in request.candidates {
        ensure_resume_text(&candidate.resume_text, state.config.max_resume_bytes)?;
        let id = candidate
            .id
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        if !seen_ids.insert(id.clone()) {
            return Err(AppError::Validation(format!("duplicate candidate id '{id}'")));
        }

        let parsed = parse_resume(&candidate.resume_text);
        let result = state
            .scorer
            .score(&parsed.skills, &required, &candidate.resume_text)
            .await?;
        years_by_id.insert(id.clone(), parsed.total_years_experience);
        batch.push(CandidateScore { id, result });
    }

    let candidates: Vec<RankedCandidateView> = rank_candidates(batch)
        .into_iter()
        .map(|ranked| {
            let years = years_by_id.get(&ranked.id).copied().unwrap_or(0.0);
            RankedCandidateView {
                cultural_fit_narrative: cultural_fit_narrative(ranked.result.cultural_fit_index)
                    .to_string(),
                success_prediction: success_prediction(
                    ranked.result.overall_fit_score,
                    ranked.result.cultural_fit_index,
                    years,
                )
                .to_string(),
                total_years_experience: years,
                id: ranked.id,
                rank: ranked.rank,
                result: ranked.result,
            }
        })
        .collect();

    info!(
        candidates = candidates.len(),
        competencies = required.len(),
        "Candidates ranked"
    );

    Ok(Json(RankResponse {
        candidates,
        required_competencies: required,
        scorer_backend: state.scorer.backend().to_string(),
    }))
}
