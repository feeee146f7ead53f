//! Pluggable competency scorer.
//!
//! Default: `KeywordCompetencyScorer` (pure, deterministic).
//! Optional: `LlmValidatedScorer` blends in an independent LLM fit estimate.
//!
//! `AppState` holds an `Arc<dyn CompetencyScorer>`, chosen at startup via config.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::resume::models::ExtractedSkill;
use crate::scoring::competency::{
    ranking_score, recommendation_for, score_competencies, ScoringResult,
};
use crate::scoring::prompts::{FIT_VALIDATION_PROMPT_TEMPLATE, FIT_VALIDATION_SYSTEM};

/// Resume text beyond this many characters is not sent to the model.
const MAX_PROMPT_RESUME_CHARS: usize = 12_000;

#[async_trait]
pub trait CompetencyScorer: Send + Sync {
    async fn score(
        &self,
        skills: &[ExtractedSkill],
        required: &[String],
        raw_text: &str,
    ) -> Result<ScoringResult, AppError>;

    /// "keyword" | "llm_validated"
    fn backend(&self) -> &'static str;
}

pub struct KeywordCompetencyScorer;

#[async_trait]
impl CompetencyScorer for KeywordCompetencyScorer {
    async fn score(
        &self,
        skills: &[ExtractedSkill],
        required: &[String],
        raw_text: &str,
    ) -> Result<ScoringResult, AppError> {
        Ok(score_competencies(skills, required, raw_text))
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

/// What the model returns for a fit cross-check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitValidation {
    pub fit_score: u32,
    #[serde(default)]
    pub rationale: String,
}

pub struct LlmValidatedScorer {
    llm: LlmClient,
    /// Share of the blended fit score taken from the model, 0.0 – 1.0.
    blend_weight: f64,
}

impl LlmValidatedScorer {
    pub fn new(llm: LlmClient, blend_weight: f64) -> Self {
        Self {
            llm,
            blend_weight: blend_weight.clamp(0.0, 1.0),
        }
    }
}

#[async_trait]
impl CompetencyScorer for LlmValidatedScorer {
    async fn score(
        &self,
        skills: &[ExtractedSkill],
        required: &[String],
        raw_text: &str,
    ) -> Result<ScoringResult, AppError> {
        let keyword_result = score_competencies(skills, required, raw_text);
        if required.is_empty() {
            return Ok(keyword_result);
        }

        let prompt = build_validation_prompt(&keyword_result, required, raw_text);
        match self
            .llm
            .call_json::<FitValidation>(&prompt, FIT_VALIDATION_SYSTEM)
            .await
        {
            Ok(validation) => {
                debug!(
                    keyword_score = keyword_result.overall_fit_score,
                    llm_score = validation.fit_score,
                    rationale = %validation.rationale,
                    "Blending LLM fit validation"
                );
                Ok(blend_validation(keyword_result, &validation, self.blend_weight))
            }
            Err(e) => {
                warn!("LLM fit validation failed, using keyword scores only: {e}");
                Ok(keyword_result)
            }
        }
    }

    fn backend(&self) -> &'static str {
        "llm_validated"
    }
}

fn build_validation_prompt(result: &ScoringResult, required: &[String], raw_text: &str) -> String {
    let resume_text: String = raw_text.chars().take(MAX_PROMPT_RESUME_CHARS).collect();
    let gaps = if result.gaps.is_empty() {
        "(none)".to_string()
    } else {
        result.gaps.join(", ")
    };
    let competencies = required.join(", ");
    let keyword_score = result.overall_fit_score.to_string();
    fill_template(
        FIT_VALIDATION_PROMPT_TEMPLATE,
        &[
            ("{competencies}", competencies.as_str()),
            ("{keyword_score}", keyword_score.as_str()),
            ("{gaps}", gaps.as_str()),
            ("{resume_text}", resume_text.as_str()),
        ],
    )
}

/// Substitutes placeholders in one left-to-right pass; inserted values are never
/// rescanned.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    loop {
        let next = values
            .iter()
            .filter_map(|(key, value)| rest.find(key).map(|at| (at, *key, *value)))
            .min_by_key(|(at, _, _)| *at);
        match next {
            Some((at, key, value)) => {
                out.push_str(&rest[..at]);
                out.push_str(value);
                rest = &rest[at + key.len()..];
            }
            None => {
                out.push_str(rest);
                return out;
            }
        }
    }
}

/// Replaces the fit score with `round(keyword × (1 − w) + llm × w)` and recomputes the
/// fields derived from it. Matches, gaps and strengths are left as the keyword pass
/// produced them.
pub fn blend_validation(
    mut result: ScoringResult,
    validation: &FitValidation,
    blend_weight: f64,
) -> ScoringResult {
    let llm_score = validation.fit_score.min(100) as f64;
    let blended = result.overall_fit_score as f64 * (1.0 - blend_weight) + llm_score * blend_weight;
    result.overall_fit_score = blended.round().clamp(0.0, 100.0) as u32;
    result.ranking_score = ranking_score(
        result.overall_fit_score,
        result.cultural_fit_index,
        result.gaps.len(),
    );
    result.recommendation_text = recommendation_for(
        result.overall_fit_score,
        result.cultural_fit_index,
        result.gaps.len(),
    )
    .to_string();
    result
}
