use std::collections::HashSet;

use crate::resume::keywords::match_keywords;
use crate::resume::models::{ExtractedSkill, SkillCategory};
use crate::resume::vocabulary::Vocabulary;

pub const TECHNICAL_CONFIDENCE: f64 = 0.9;
pub const SOFT_CONFIDENCE: f64 = 0.75;
/// Upper bound on skills handed to the scorer.
pub const MAX_SKILLS: usize = 30;

/// Extracts technical and soft skills from the full resume text.
///
/// Duplicate labels (case-insensitive) keep the first entry seen; the kept entry's
/// confidence is not revisited. Output is sorted by confidence, highest first, and
/// capped at [`MAX_SKILLS`].
pub fn extract_skills(text: &str, vocabulary: &Vocabulary) -> Vec<ExtractedSkill> {
    let technical = match_keywords(text, vocabulary.technical_skills)
        .into_iter()
        .map(|label| (label, TECHNICAL_CONFIDENCE, SkillCategory::Technical));
    let soft = match_keywords(text, vocabulary.soft_skills)
        .into_iter()
        .map(|label| (label, SOFT_CONFIDENCE, SkillCategory::Soft));

    let mut seen = HashSet::new();
    let mut skills: Vec<ExtractedSkill> = technical
        .chain(soft)
        .filter(|(label, _, _)| seen.insert(label.to_lowercase()))
        .map(|(label, confidence, category)| ExtractedSkill {
            label: label.to_string(),
            confidence,
            category,
        })
        .collect();

    // Stable: equal confidences keep vocabulary order.
    skills.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    skills.truncate(MAX_SKILLS);
    skills
}
