//! Keyword tables driving extraction and scoring.
//!
//! Every table is ordered: where a lookup is "first match wins" the order below is the
//! priority order. Tables are built once and shared read-only through [`Vocabulary::standard`].

use crate::resume::models::EducationLevel;

const TECHNICAL_SKILLS: &[&str] = &[
    "Python", "JavaScript", "TypeScript", "Java", "C++", "C#", "Go", "Golang", "Rust",
    "Ruby", "PHP", "Swift", "Kotlin", "Scala", "SQL", "NoSQL", "HTML", "CSS", "React",
    "Angular", "Vue", "Node.js", "Django", "Flask", "FastAPI", "Spring", "Spring Boot",
    ".NET", "GraphQL", "REST", "Microservices", "Docker", "Kubernetes", "Terraform",
    "Ansible", "Jenkins", "CI/CD", "Git", "Linux", "AWS", "Azure", "GCP", "PostgreSQL",
    "MySQL", "MongoDB", "Redis", "Elasticsearch", "Kafka", "RabbitMQ", "Spark", "Hadoop",
    "Airflow", "TensorFlow", "PyTorch", "Scikit-learn", "Pandas", "NumPy",
    "Machine Learning", "Deep Learning", "Data Science", "Data Analysis", "NLP",
    "Computer Vision", "Tableau", "Power BI", "Excel", "Figma", "Agile", "Scrum",
    "DevOps", "Cybersecurity", "Blockchain",
];

const SOFT_SKILLS: &[&str] = &[
    "Leadership", "Communication", "Teamwork", "Collaboration", "Problem Solving",
    "Critical Thinking", "Time Management", "Adaptability", "Creativity", "Mentoring",
    "Negotiation", "Presentation", "Project Management", "Stakeholder Management",
    "Decision Making", "Conflict Resolution", "Attention to Detail", "Customer Service",
    "Public Speaking", "Emotional Intelligence",
];

/// Job-title cues, most specific first so "Senior Software Engineer" wins over "Engineer".
const JOB_TITLES: &[&str] = &[
    "Senior Software Engineer", "Staff Software Engineer", "Principal Engineer",
    "Software Engineer", "Software Developer", "Data Scientist", "Data Engineer",
    "Data Analyst", "Machine Learning Engineer", "DevOps Engineer", "Product Manager",
    "Project Manager", "Engineering Manager", "Technical Lead", "Team Lead",
    "Solutions Architect", "UX Designer", "QA Engineer", "Business Analyst",
    "Systems Administrator", "Consultant", "Architect", "Engineer", "Developer",
    "Manager", "Director", "Analyst", "Designer", "Scientist", "Intern", "Specialist",
    "Coordinator", "Administrator",
];

/// Tested in this order; first level with a hit owns the line.
const EDUCATION_LEVELS: &[(EducationLevel, &[&str])] = &[
    (
        EducationLevel::Bachelor,
        &["bachelor", "bachelor's", "bachelors", "b.s.", "b.a.", "bsc", "b.sc.", "b.tech", "b.e."],
    ),
    (
        EducationLevel::Master,
        &["master", "master's", "masters", "m.s.", "m.a.", "msc", "m.sc.", "mba", "m.tech"],
    ),
    (
        EducationLevel::PhD,
        &["phd", "ph.d.", "ph.d", "doctorate", "doctoral"],
    ),
    (
        EducationLevel::Certification,
        &["certification", "certificate", "certified"],
    ),
    (
        EducationLevel::HighSchool,
        &["high school", "secondary school", "diploma", "ged"],
    ),
];

const EXPERT_CUES: &[&str] = &["expert", "principal", "architect", "master", "guru", "authority"];
const ADVANCED_CUES: &[&str] = &["advanced", "senior", "proficient", "extensive", "deep", "strong"];
const INTERMEDIATE_CUES: &[&str] = &["intermediate", "experienced", "working knowledge", "competent", "solid"];
const BEGINNER_CUES: &[&str] = &["beginner", "basic", "junior", "familiar", "learning", "exposure"];

/// A group of cultural-fit signal words and the bonus awarded when any of them occurs.
#[derive(Debug, Clone, Copy)]
pub struct CultureSignal {
    pub cues: &'static [&'static str],
    pub bonus: u32,
}

const CULTURE_SIGNALS: &[CultureSignal] = &[
    CultureSignal { cues: &["agile", "scrum", "sprint"], bonus: 10 },
    CultureSignal { cues: &["collaborate", "teamwork", "cross-functional"], bonus: 10 },
    CultureSignal { cues: &["innovation", "creative"], bonus: 5 },
    CultureSignal { cues: &["leadership", "mentor"], bonus: 8 },
];

#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub technical_skills: &'static [&'static str],
    pub soft_skills: &'static [&'static str],
    pub job_titles: &'static [&'static str],
    pub education_levels: &'static [(EducationLevel, &'static [&'static str])],
    /// Expert → Advanced → Intermediate → Beginner.
    pub proficiency_cues: [&'static [&'static str]; 4],
    pub culture_signals: &'static [CultureSignal],
}

static STANDARD: Vocabulary = Vocabulary {
    technical_skills: TECHNICAL_SKILLS,
    soft_skills: SOFT_SKILLS,
    job_titles: JOB_TITLES,
    education_levels: EDUCATION_LEVELS,
    proficiency_cues: [EXPERT_CUES, ADVANCED_CUES, INTERMEDIATE_CUES, BEGINNER_CUES],
    culture_signals: CULTURE_SIGNALS,
};

impl Vocabulary {
    /// The process-wide vocabulary.
    pub fn standard() -> &'static Vocabulary {
        &STANDARD
    }
}
