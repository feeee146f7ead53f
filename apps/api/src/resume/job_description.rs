use std::collections::HashSet;

use crate::resume::keywords::match_keywords;
use crate::resume::vocabulary::Vocabulary;

/// Derives a required-competency list from a job description: every technical skill
/// mentioned, then every soft skill, each label once.
pub fn extract_required_competencies(jd_text: &str, vocabulary: &Vocabulary) -> Vec<String> {
    let mut seen = HashSet::new();
    match_keywords(jd_text, vocabulary.technical_skills)
        .into_iter()
        .chain(match_keywords(jd_text, vocabulary.soft_skills))
        .filter(|label| seen.insert(label.to_lowercase()))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTERPRISE_JD: &str = r#"
        Software Engineer — Platform Team
        Join our collaborative team. Required: Java, Spring Boot, SQL.
        Preferred: Kubernetes, CI/CD experience. Strong Communication expected.
    "#;

    #[test]
    fn test_technical_before_soft() {
        let competencies = extract_required_competencies(ENTERPRISE_JD, Vocabulary::standard());
        assert_eq!(
            competencies,
            vec!["Java", "SQL", "Spring", "Spring Boot", "Kubernetes", "CI/CD", "Communication"]
        );
    }

    #[test]
    fn test_empty_jd_has_no_competencies() {
        assert!(extract_required_competencies("", Vocabulary::standard()).is_empty());
    }
}
