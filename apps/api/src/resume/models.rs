use serde::{Deserialize, Serialize};

/// Number of buckets in the bag-of-words embedding placeholder.
pub const EMBEDDING_DIMENSIONS: usize = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Technical,
    Soft,
    Domain,
}

/// A skill found in resume text. One per distinct (case-insensitive) label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedSkill {
    pub label: String,
    pub confidence: f64, // 0.0 – 1.0
    pub category: SkillCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationLevel {
    HighSchool,
    Bachelor,
    Master,
    PhD,
    Certification,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedEducation {
    pub degree: String,
    pub field: String,
    pub institution: String,
    pub year: Option<i32>,
    pub level: EducationLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedExperience {
    pub title: String,
    pub company: String,
    pub duration_text: String,
    pub years_in_role: u32, // always ≥ 1
    pub responsibilities: Vec<String>,
    pub skills: Vec<String>,
}

/// Full structured output of resume parsing. Built once per parse call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub skills: Vec<ExtractedSkill>,
    pub education: Vec<ExtractedEducation>,
    pub experience: Vec<ExtractedExperience>,
    pub total_years_experience: f64,
    pub summary: String,
    pub embedding: Vec<f32>,
    pub extraction_score: f64, // 0.0 – 1.0
}
