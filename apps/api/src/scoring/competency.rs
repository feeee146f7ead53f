//! Competency scoring: best-match selection per required competency, proficiency
//! inference and the aggregate fit / culture / ranking scores.

use serde::{Deserialize, Serialize};

use crate::resume::models::{ExtractedSkill, SkillCategory};
use crate::resume::vocabulary::Vocabulary;
use crate::scoring::similarity::similarity;

/// A skill must be strictly more similar than this to count as a match.
pub const MATCH_THRESHOLD: f64 = 0.5;
/// Strength a match needs to be listed as a strength.
pub const STRENGTH_THRESHOLD: f64 = 0.7;
pub const MAX_STRENGTHS: usize = 5;
/// Returned when there is nothing to score against.
pub const NEUTRAL_FIT_SCORE: u32 = 50;

const CULTURE_BASELINE: u32 = 50;
const SOFT_SKILL_BONUS_CAP: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ProficiencyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProficiencyLevel::Beginner => "Beginner",
            ProficiencyLevel::Intermediate => "Intermediate",
            ProficiencyLevel::Advanced => "Advanced",
            ProficiencyLevel::Expert => "Expert",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetencyMatch {
    pub competency: String,
    pub matched_skill: String, // empty for gaps
    pub confidence_score: f64,
    pub proficiency_level: ProficiencyLevel,
    pub is_gap: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub overall_fit_score: u32,  // 0 – 100
    pub ranking_score: u32,      // 0 – 100
    pub matches: Vec<CompetencyMatch>, // confidence descending
    pub gaps: Vec<String>,
    pub strengths: Vec<String>, // at most MAX_STRENGTHS
    pub recommendation_text: String,
    pub cultural_fit_index: u32, // 0 – 100
}

/// Scores extracted skills against the required competencies.
///
/// Every competency yields exactly one `CompetencyMatch`. `gaps` and `strengths` are
/// derived from the sorted matches.
pub fn score_competencies(
    skills: &[ExtractedSkill],
    required: &[String],
    raw_text: &str,
) -> ScoringResult {
    let vocabulary = Vocabulary::standard();

    let mut matches: Vec<CompetencyMatch> = required
        .iter()
        .map(|competency| match_competency(competency, skills, vocabulary))
        .collect();
    matches.sort_by(|a, b| b.confidence_score.total_cmp(&a.confidence_score));

    let gaps: Vec<String> = matches
        .iter()
        .filter(|m| m.is_gap)
        .map(|m| m.competency.clone())
        .collect();

    let strengths: Vec<String> = matches
        .iter()
        .filter(|m| !m.is_gap && m.confidence_score > STRENGTH_THRESHOLD)
        .take(MAX_STRENGTHS)
        .map(|m| format!("{} ({})", m.matched_skill, m.proficiency_level.as_str()))
        .collect();

    let overall_fit_score = overall_fit_score(&matches);
    let soft_skill_count = skills
        .iter()
        .filter(|s| s.category == SkillCategory::Soft)
        .count();
    let cultural_fit_index = cultural_fit_index(raw_text, soft_skill_count, vocabulary);
    let ranking_score = ranking_score(overall_fit_score, cultural_fit_index, gaps.len());
    let recommendation_text =
        recommendation_for(overall_fit_score, cultural_fit_index, gaps.len()).to_string();

    ScoringResult {
        overall_fit_score,
        ranking_score,
        matches,
        gaps,
        strengths,
        recommendation_text,
        cultural_fit_index,
    }
}

fn match_competency(
    competency: &str,
    skills: &[ExtractedSkill],
    vocabulary: &Vocabulary,
) -> CompetencyMatch {
    // Strict `>` keeps the earliest skill on ties.
    let mut best: Option<(&ExtractedSkill, f64)> = None;
    for skill in skills {
        let score = similarity(competency, &skill.label);
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((skill, score));
        }
    }

    match best {
        Some((skill, score)) if score > MATCH_THRESHOLD => CompetencyMatch {
            competency: competency.to_string(),
            matched_skill: skill.label.clone(),
            confidence_score: score * skill.confidence,
            proficiency_level: infer_proficiency(&skill.label, vocabulary),
            is_gap: false,
        },
        _ => CompetencyMatch {
            competency: competency.to_string(),
            matched_skill: String::new(),
            confidence_score: 0.0,
            proficiency_level: ProficiencyLevel::Beginner,
            is_gap: true,
        },
    }
}

/// First cue set (expert → beginner) with a substring hit wins; no hit is Beginner.
pub fn infer_proficiency(text: &str, vocabulary: &Vocabulary) -> ProficiencyLevel {
    const LEVELS: [ProficiencyLevel; 4] = [
        ProficiencyLevel::Expert,
        ProficiencyLevel::Advanced,
        ProficiencyLevel::Intermediate,
        ProficiencyLevel::Beginner,
    ];
    let lower = text.to_lowercase();
    LEVELS
        .iter()
        .zip(vocabulary.proficiency_cues.iter())
        .find(|(_, cues)| cues.iter().any(|cue| lower.contains(cue)))
        .map(|(level, _)| *level)
        .unwrap_or(ProficiencyLevel::Beginner)
}

/// `round(match% × 0.6 + avg_confidence × 100 × 0.4)`; neutral 50 when nothing is required.
pub fn overall_fit_score(matches: &[CompetencyMatch]) -> u32 {
    if matches.is_empty() {
        return NEUTRAL_FIT_SCORE;
    }
    let total = matches.len() as f64;
    let matched = matches.iter().filter(|m| !m.is_gap).count() as f64;
    let match_percentage = matched / total * 100.0;
    let average_confidence = matches.iter().map(|m| m.confidence_score).sum::<f64>() / total;
    clamp_score(match_percentage * 0.6 + average_confidence * 100.0 * 0.4)
}

/// Baseline 50 plus signal-group bonuses and up to 15 for soft skills, capped at 100.
pub fn cultural_fit_index(raw_text: &str, soft_skill_count: usize, vocabulary: &Vocabulary) -> u32 {
    let lower = raw_text.to_lowercase();
    let signal_bonus: u32 = vocabulary
        .culture_signals
        .iter()
        .filter(|signal| signal.cues.iter().any(|cue| lower.contains(cue)))
        .map(|signal| signal.bonus)
        .sum();
    let soft_bonus = (soft_skill_count as u32).saturating_mul(2).min(SOFT_SKILL_BONUS_CAP);
    (CULTURE_BASELINE + signal_bonus + soft_bonus).min(100)
}

/// `round(fit × 0.5 + culture × 0.3 + max(0, 1 − gaps × 0.15) × 100 × 0.2)`
pub fn ranking_score(overall_fit: u32, cultural_fit: u32, gap_count: usize) -> u32 {
    let coverage = (1.0 - gap_count as f64 * 0.15).max(0.0);
    clamp_score(overall_fit as f64 * 0.5 + cultural_fit as f64 * 0.3 + coverage * 100.0 * 0.2)
}

/// Decision table, first matching row wins.
pub fn recommendation_for(overall_fit: u32, cultural_fit: u32, gap_count: usize) -> &'static str {
    if overall_fit > 80 && cultural_fit > 75 {
        "Highly Recommended — Schedule Interview"
    } else if overall_fit > 65 && gap_count <= 2 {
        "Recommended — Consider for Technical Round"
    } else if overall_fit > 50 {
        "Potential Fit — Request Additional Info"
    } else if gap_count > 5 {
        "Requires Training — Consider for Entry Level"
    } else {
        "Not Recommended — Skill Gap Too Large"
    }
}

fn clamp_score(value: f64) -> u32 {
    value.round().clamp(0.0, 100.0) as u32
}
