// Resume parsing: segmentation, keyword matching, entity extraction.
// Pure and synchronous. Nothing in here touches the network or disk.

pub mod embedding;
pub mod education;
pub mod experience;
pub mod handlers;
pub mod job_description;
pub mod keywords;
pub mod models;
pub mod skills;
pub mod vocabulary;

use tracing::debug;

use crate::resume::embedding::embed_text;
use crate::resume::education::extract_education;
use crate::resume::experience::extract_experience;
use crate::resume::models::{ExtractedEducation, ExtractedExperience, ExtractedSkill, ParsedResume};
use crate::resume::skills::extract_skills;
use crate::resume::vocabulary::Vocabulary;

const SUMMARY_SKILL_COUNT: usize = 5;

/// Parses raw resume text with the standard vocabulary.
pub fn parse_resume(text: &str) -> ParsedResume {
    parse_resume_with(text, Vocabulary::standard())
}

pub fn parse_resume_with(text: &str, vocabulary: &Vocabulary) -> ParsedResume {
    let skills = extract_skills(text, vocabulary);
    let education = extract_education(text, vocabulary);
    let experience = extract_experience(text, vocabulary);

    let total_years: u32 = experience.iter().map(|e| e.years_in_role).sum();
    let total_years_experience = (total_years as f64 * 10.0).round() / 10.0;

    let extraction_score = compute_extraction_score(&skills, &education, &experience);
    let summary = build_summary(total_years_experience, &skills, &education, &experience);

    debug!(
        skills = skills.len(),
        education = education.len(),
        experience = experience.len(),
        extraction_score,
        "Resume parsed"
    );

    ParsedResume {
        embedding: embed_text(text),
        skills,
        education,
        experience,
        total_years_experience,
        summary,
        extraction_score,
    }
}

/// 0.5 baseline, +0.2 for more than five skills, +0.15 each for any education and
/// any experience.
fn compute_extraction_score(
    skills: &[ExtractedSkill],
    education: &[ExtractedEducation],
    experience: &[ExtractedExperience],
) -> f64 {
    let mut score = 0.5;
    if skills.len() > 5 {
        score += 0.2;
    }
    if !education.is_empty() {
        score += 0.15;
    }
    if !experience.is_empty() {
        score += 0.15;
    }
    f64::min(score, 1.0)
}

fn build_summary(
    total_years: f64,
    skills: &[ExtractedSkill],
    education: &[ExtractedEducation],
    experience: &[ExtractedExperience],
) -> String {
    let mut sentences = Vec::new();

    if let Some(latest) = experience.first() {
        sentences.push(format!("{total_years} years of professional experience."));
        if latest.company == "Unknown" {
            sentences.push(format!("Most recent role: {}.", latest.title));
        } else {
            sentences.push(format!("Most recent role: {} at {}.", latest.title, latest.company));
        }
    }

    if !skills.is_empty() {
        let top: Vec<&str> = skills
            .iter()
            .take(SUMMARY_SKILL_COUNT)
            .map(|s| s.label.as_str())
            .collect();
        sentences.push(format!("Key skills: {}.", top.join(", ")));
    }

    if let Some(edu) = education.first() {
        if edu.institution == "Unknown" {
            sentences.push(format!("Education: {} in {}.", edu.degree, edu.field));
        } else {
            sentences.push(format!(
                "Education: {} in {} ({}).",
                edu.degree, edu.field, edu.institution
            ));
        }
    }

    if sentences.is_empty() {
        "No structured information could be extracted.".to_string()
    } else {
        sentences.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::models::EMBEDDING_DIMENSIONS;
    use proptest::prelude::*;

    const SAMPLE_RESUME: &str = "\
Jane Doe
Senior Software Engineer at Acme Corp, 2015-2020
- Led a team of 5 engineers building Python and Kubernetes services
- Introduced Agile practices and CI/CD
Software Engineer at Initech, 2012-2015
- Built REST APIs in Java
Bachelor of Science in Computer Science, MIT, 2012
Skills: Docker, PostgreSQL, Leadership, Communication
";

    #[test]
    fn test_empty_text_degrades_gracefully() {
        let parsed = parse_resume("");
        assert!(parsed.skills.is_empty());
        assert!(parsed.education.is_empty());
        assert!(parsed.experience.is_empty());
        assert_eq!(parsed.total_years_experience, 0.0);
        assert_eq!(parsed.extraction_score, 0.5);
        assert_eq!(parsed.summary, "No structured information could be extracted.");
        assert_eq!(parsed.embedding.len(), EMBEDDING_DIMENSIONS);
    }

    #[test]
    fn test_full_resume_extraction() {
        let parsed = parse_resume(SAMPLE_RESUME);
        assert_eq!(parsed.experience.len(), 2);
        assert_eq!(parsed.experience[0].years_in_role, 5);
        assert_eq!(parsed.experience[1].years_in_role, 3);
        assert_eq!(parsed.total_years_experience, 8.0);
        assert_eq!(parsed.education.len(), 1);
        assert!(parsed.skills.len() > 5);
        assert!((parsed.extraction_score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_mentions_role_and_skills() {
        let parsed = parse_resume(SAMPLE_RESUME);
        assert!(parsed.summary.starts_with("8 years of professional experience."));
        assert!(parsed
            .summary
            .contains("Most recent role: Senior Software Engineer at Acme Corp."));
        assert!(parsed.summary.contains("Key skills: Python"));
        assert!(parsed
            .summary
            .contains("Education: Bachelor of Science in Computer Science (MIT)."));
    }

    #[test]
    fn test_extraction_score_partial() {
        // Two skills, one role, no education: 0.5 + 0.15
        let parsed = parse_resume("Analyst at Globex\n- Reporting in Excel and SQL");
        assert!((parsed.extraction_score - 0.65).abs() < 1e-9);
    }

    #[test]
    fn test_parse_is_deterministic() {
        assert_eq!(parse_resume(SAMPLE_RESUME), parse_resume(SAMPLE_RESUME));
    }

    proptest! {
        #[test]
        fn parse_never_panics_and_stays_bounded(text in "\\PC{0,400}") {
            let parsed = parse_resume(&text);
            prop_assert!((0.5..=1.0).contains(&parsed.extraction_score));
            prop_assert!(parsed.skills.len() <= skills::MAX_SKILLS);
            prop_assert!(parsed.experience.iter().all(|e| e.years_in_role >= 1));
            prop_assert_eq!(parsed.embedding.len(), EMBEDDING_DIMENSIONS);
        }

        #[test]
        fn parse_is_deterministic_for_any_text(text in "[A-Za-z0-9 ,.\\-\n]{0,300}") {
            prop_assert_eq!(parse_resume(&text), parse_resume(&text));
        }
    }
}
